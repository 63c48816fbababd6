use polars::prelude::*;
use anyhow::Result;

// Every reducer takes the denormalized line relation and materializes a fresh
// frame. Sort order on equal aggregates is pinned by a secondary ascending key
// so the output never depends on engine row order.

pub fn spending_per_customer(lines: &DataFrame) -> Result<DataFrame> {
    let df = lines
        .clone()
        .lazy()
        .group_by([col("customer_id"), col("name")])
        .agg([col("total_price").sum().alias("total_spent")])
        .sort_by_exprs(vec![col("total_spent"), col("name")], vec![true, false], false, false)
        .collect()?;
    Ok(df)
}

pub fn top_products(lines: &DataFrame) -> Result<DataFrame> {
    let df = lines
        .clone()
        .lazy()
        .group_by([col("product_name")])
        .agg([col("quantity").sum().alias("total_sold")])
        .sort_by_exprs(vec![col("total_sold"), col("product_name")], vec![true, false], false, false)
        .collect()?;
    Ok(df)
}

pub fn city_spending(lines: &DataFrame) -> Result<DataFrame> {
    let df = lines
        .clone()
        .lazy()
        .group_by([col("city")])
        .agg([col("total_price").sum().alias("city_spend")])
        .sort_by_exprs(vec![col("city_spend"), col("city")], vec![true, false], false, false)
        .collect()?;
    Ok(df)
}

/// Dense rank over descending spend: ties share a rank, the next distinct
/// spend gets the previous rank + 1. Computed over the whole spending frame.
pub fn rank_customers(spending: &DataFrame) -> Result<DataFrame> {
    let options = RankOptions { method: RankMethod::Dense, descending: true };
    let df = spending
        .clone()
        .lazy()
        .with_column(col("total_spent").rank(options, None).alias("rank"))
        .collect()?;
    Ok(df)
}
