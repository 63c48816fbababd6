use polars::prelude::*;
use plotters::prelude::*;
use anyhow::{anyhow, Result};
use std::path::Path;

pub const SKYBLUE: RGBColor = RGBColor(135, 206, 235);
pub const LIGHTGREEN: RGBColor = RGBColor(144, 238, 144);

/// Render one vertical bar chart to an SVG file: one bar per row, category
/// labels from `label_col`, bar heights from `value_col`.
pub fn bar_chart(
    df: &DataFrame,
    label_col: &str,
    value_col: &str,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    color: RGBColor,
    path: &Path,
) -> Result<()> {
    let labels: Vec<String> = df
        .column(label_col)?
        .utf8()?
        .into_no_null_iter()
        .map(|s| s.to_string())
        .collect();
    let values: Vec<i64> = df.column(value_col)?.i64()?.into_no_null_iter().collect();
    if values.is_empty() {
        return Err(anyhow!("nothing to chart in column {}", value_col));
    }

    let y_max = values.iter().copied().max().unwrap_or(0);
    let y_max = y_max + y_max / 10 + 1; // headroom above the tallest bar

    let root = SVGBackend::new(path, (800, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d((0..labels.len()).into_segmented(), 0i64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) if *i < labels.len() => labels[*i].clone(),
            _ => String::new(),
        })
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()?;

    chart.draw_series(values.iter().enumerate().map(|(i, v)| {
        let mut bar = Rectangle::new(
            [(SegmentValue::Exact(i), 0i64), (SegmentValue::Exact(i + 1), *v)],
            color.filled(),
        );
        bar.set_margin(0, 0, 8, 8);
        bar
    }))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analytics, pipeline, tables};
    use std::fs;

    #[test]
    fn renders_svg_file() -> Result<()> {
        let lines = pipeline::denormalize(
            &tables::transactions()?,
            &tables::customers()?,
            &tables::products()?,
        )?;
        let top = analytics::top_products(&lines)?.head(Some(5));

        let path = std::env::temp_dir().join("retail_analytics_top_products_test.svg");
        bar_chart(
            &top,
            "product_name",
            "total_sold",
            "Top 5 Products by Quantity Sold",
            "Product",
            "Units Sold",
            SKYBLUE,
            &path,
        )?;

        let svg = fs::read_to_string(&path)?;
        assert!(svg.contains("<svg"));
        fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn empty_frame_is_an_error() -> Result<()> {
        let empty = df!(
            "city" => Vec::<String>::new(),
            "city_spend" => Vec::<i64>::new(),
        )?;
        let path = std::env::temp_dir().join("retail_analytics_empty_test.svg");
        assert!(bar_chart(&empty, "city", "city_spend", "t", "x", "y", LIGHTGREEN, &path).is_err());
        Ok(())
    }
}
