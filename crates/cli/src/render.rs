use salesrank_report::{ProductQuantity, ReportRow};

use crate::{CliError, OutputFormat};

pub fn render(rows: &[ReportRow], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => render_json(rows),
        OutputFormat::Csv => render_csv(rows),
        OutputFormat::Table => Ok(render_table(rows)),
    }
}

fn render_json(rows: &[ReportRow]) -> Result<String, CliError> {
    let mut json = serde_json::to_string_pretty(rows)
        .map_err(|e| CliError::runtime(format!("JSON serialization error: {e}")))?;
    json.push('\n');
    Ok(json)
}

/// `sku:qty;sku:qty`, in ranked order.
fn flatten_top_products(products: &[ProductQuantity]) -> String {
    products
        .iter()
        .map(|p| format!("{}:{}", p.sku, p.quantity))
        .collect::<Vec<_>>()
        .join(";")
}

fn render_csv(rows: &[ReportRow]) -> Result<String, CliError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let csv_err = |e: csv::Error| CliError::runtime(format!("CSV write error: {e}"));

    writer
        .write_record(["seller_id", "name", "revenue", "profit", "sales_count", "bonus", "top_products"])
        .map_err(csv_err)?;
    for row in rows {
        writer
            .write_record([
                row.seller_id.clone(),
                row.name.clone(),
                format!("{:.2}", row.revenue),
                format!("{:.2}", row.profit),
                row.sales_count.to_string(),
                format!("{:.2}", row.bonus),
                flatten_top_products(&row.top_products),
            ])
            .map_err(csv_err)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::runtime(format!("CSV write error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| CliError::runtime(format!("CSV encoding error: {e}")))
}

fn render_table(rows: &[ReportRow]) -> String {
    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("name".len());

    let mut out = format!(
        "{:>4}  {:<name_width$}  {:>12}  {:>12}  {:>6}  {:>10}  {}\n",
        "rank", "name", "revenue", "profit", "sales", "bonus", "top product",
    );
    for (rank, row) in rows.iter().enumerate() {
        let best = row
            .top_products
            .first()
            .map(|p| format!("{} ({})", p.sku, p.quantity))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:>4}  {:<name_width$}  {:>12.2}  {:>12.2}  {:>6}  {:>10.2}  {}\n",
            rank + 1,
            row.name,
            row.revenue,
            row.profit,
            row.sales_count,
            row.bonus,
            best,
        ));
    }
    out
}
