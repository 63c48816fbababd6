use polars::prelude::*;
use anyhow::Result;

// The three base relations are built once from literals and never mutated.
// Ids and amounts are i64 throughout so that quantity * price and the later
// sums stay in one integer type.

pub fn customers() -> Result<DataFrame> {
    let df = df!(
        "customer_id" => &[1i64, 2, 3, 4, 5],
        "name" => &["Alice", "Bob", "Charlie", "David", "Eva"],
        "city" => &["Bangalore", "Mumbai", "Delhi", "Chennai", "Hyderabad"],
    )?;
    Ok(df)
}

pub fn products() -> Result<DataFrame> {
    let df = df!(
        "product_id" => &[101i64, 102, 103, 104, 105],
        "product_name" => &["Keyboard", "Mouse", "Monitor", "Laptop", "Webcam"],
        "price" => &[1200i64, 700, 8000, 55000, 2500],
    )?;
    Ok(df)
}

pub fn transactions() -> Result<DataFrame> {
    let df = df!(
        "customer_id" => &[1i64, 1, 2, 2, 3, 3, 4, 4, 5, 5, 5],
        "product_id" => &[101i64, 102, 104, 103, 105, 101, 102, 103, 104, 105, 102],
        "date" => &[
            "2025-06-01", "2025-06-01", "2025-06-03", "2025-06-04", "2025-06-05",
            "2025-06-06", "2025-06-06", "2025-06-07", "2025-06-08", "2025-06-09",
            "2025-06-10",
        ],
        "quantity" => &[1i64, 2, 1, 1, 2, 1, 1, 1, 1, 1, 2],
    )?;
    Ok(df)
}
