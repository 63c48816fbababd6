use polars::prelude::*;
use anyhow::Result;
use log::warn;

/// Inner-join transactions with customers and products, then derive the line
/// total. Rows whose foreign keys have no match are dropped by the join; the
/// drop is surfaced as a warning because for valid data the joined relation
/// must keep every transaction row.
pub fn denormalize(
    transactions: &DataFrame,
    customers: &DataFrame,
    products: &DataFrame,
) -> Result<DataFrame> {
    let joined = transactions
        .join(customers, ["customer_id"], ["customer_id"], JoinArgs::new(JoinType::Inner))?
        .join(products, ["product_id"], ["product_id"], JoinArgs::new(JoinType::Inner))?;

    if joined.height() < transactions.height() {
        warn!(
            "inner join dropped {} of {} transaction rows (orphaned customer or product ids)",
            transactions.height() - joined.height(),
            transactions.height()
        );
    }

    let lines = joined
        .lazy()
        .with_column((col("quantity") * col("price")).alias("total_price"))
        .collect()?;
    Ok(lines)
}
