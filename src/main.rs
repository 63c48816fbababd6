use anyhow::Result;
use std::{fs, path::Path, time::SystemTime};

mod tables;
mod pipeline;
mod analytics;
mod charts;

fn main() -> Result<()> {
    env_logger::init();

    // Base relations
    let customers = tables::customers()?;
    println!("Customers:");
    println!("{}", customers);

    let products = tables::products()?;
    println!("Products:");
    println!("{}", products);

    let transactions = tables::transactions()?;
    println!("Transactions:");
    println!("{}", transactions);

    // Join + line totals
    let start = SystemTime::now();
    let lines = pipeline::denormalize(&transactions, &customers, &products)?;
    println!("Pipeline took: {} ms.", start.elapsed()?.as_millis());

    println!("Transaction lines:");
    let display = lines.select(["customer_id", "name", "product_name", "quantity", "price", "total_price"])?;
    println!("{}", display);

    // Aggregates
    let spending = analytics::spending_per_customer(&lines)?;
    println!("Total spending per customer:");
    println!("{}", spending);

    let top = analytics::top_products(&lines)?;
    println!("Top products by quantity sold:");
    println!("{}", top);

    let ranked = analytics::rank_customers(&spending)?;
    println!("Ranked customers:");
    println!("{}", ranked);

    let cities = analytics::city_spending(&lines)?;
    println!("Total spending by city:");
    println!("{}", cities);

    // Charts
    let out = Path::new("charts");
    fs::create_dir_all(out)?;
    charts::bar_chart(
        &top.head(Some(5)),
        "product_name",
        "total_sold",
        "Top 5 Products by Quantity Sold",
        "Product",
        "Units Sold",
        charts::SKYBLUE,
        &out.join("top_products.svg"),
    )?;
    charts::bar_chart(
        &cities,
        "city",
        "city_spend",
        "Total Spending by City",
        "City",
        "Amount Spent",
        charts::LIGHTGREEN,
        &out.join("city_spending.svg"),
    )?;
    println!("Charts written to {}", out.display());

    Ok(())
}
