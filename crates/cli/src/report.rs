//! `salesrank report` / `salesrank validate`.

use std::path::{Path, PathBuf};

use salesrank_report::load::load_dataset;
use salesrank_report::validate::validate_dataset;
use salesrank_report::ReportConfig;
use tracing::info;

use crate::render::render;
use crate::{CliError, OutputFormat};

fn load_config(path: Option<&Path>) -> Result<ReportConfig, CliError> {
    let Some(path) = path else {
        return Ok(ReportConfig::default());
    };
    let config_str = std::fs::read_to_string(path).map_err(|e| {
        CliError::runtime(format!("cannot read config {}: {e}", path.display()))
    })?;
    let config = ReportConfig::from_toml(&config_str)?;
    info!(config = %path.display(), "config loaded");
    Ok(config)
}

pub fn cmd_report(
    dataset_path: PathBuf,
    config_path: Option<PathBuf>,
    format: OutputFormat,
    output_file: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = load_config(config_path.as_deref())?;
    let dataset = load_dataset(&dataset_path)?;

    let rows = salesrank_report::run(&dataset, &config.policy(), &config.report)?;
    info!(rows = rows.len(), "report built");

    let rendered = render(&rows, format)?;

    if let Some(ref path) = output_file {
        std::fs::write(path, &rendered).map_err(|e| {
            CliError::runtime(format!("cannot write output: {e}"))
                .with_hint("check that the output directory exists")
        })?;
        eprintln!("wrote {}", path.display());
    } else {
        print!("{rendered}");
    }

    let total_bonus: f64 = rows.iter().map(|r| r.bonus).sum();
    eprintln!(
        "{} sellers ranked, total bonus {:.2}",
        rows.len(),
        total_bonus
    );

    Ok(())
}

pub fn cmd_validate(dataset_path: PathBuf, config_path: Option<PathBuf>) -> Result<(), CliError> {
    let config = load_config(config_path.as_deref())?;
    let dataset = load_dataset(&dataset_path)?;
    let dataset = validate_dataset(Some(&dataset))?;

    let item_count: usize = dataset.purchase_records.iter().map(|r| r.items.len()).sum();
    println!(
        "ok: {} sellers, {} products, {} purchase records ({} line items)",
        dataset.sellers.len(),
        dataset.products.len(),
        dataset.purchase_records.len(),
        item_count,
    );
    if config_path.is_some() {
        println!(
            "config: leader {:.2}, podium {:.2}, base {:.2}, last {:.2}, top {}",
            config.bonus.leader,
            config.bonus.podium,
            config.bonus.base,
            config.bonus.last,
            config.report.top_products,
        );
    }

    Ok(())
}
