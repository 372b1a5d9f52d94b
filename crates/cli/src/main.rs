// salesrank - per-seller sales performance reports from JSON datasets

mod exit_codes;
mod render;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use exit_codes::{report_exit_code, EXIT_SUCCESS};
use salesrank_report::ReportError;

#[derive(Parser)]
#[command(name = "salesrank")]
#[command(about = "Rank sellers by profit and compute their bonuses")]
#[command(long_version = long_version())]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the seller report from a JSON dataset
    #[command(after_help = "\
Examples:
  salesrank report data.json
  salesrank report data.json --format json
  salesrank report data.json --config bonus.salesrank.toml --format csv --output report.csv")]
    Report {
        /// Path to the dataset (.json with sellers, products, purchase_records)
        dataset: PathBuf,

        /// Bonus and report settings (.toml)
        #[arg(long, short = 'c', env = "SALESRANK_CONFIG")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write the report to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Check a dataset (and optional config) without building the report
    #[command(after_help = "\
Examples:
  salesrank validate data.json
  salesrank validate data.json --config bonus.salesrank.toml")]
    Validate {
        /// Path to the dataset
        dataset: PathBuf,

        /// Bonus and report settings (.toml)
        #[arg(long, short = 'c', env = "SALESRANK_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        " (", env!("SALESRANK_COMMIT"), ")",
        "\nengine:  salesrank-report ", env!("CARGO_PKG_VERSION"),
        "\ntarget:  ", env!("SALESRANK_TARGET"),
    )
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(verbose = cli.verbose, "salesrank started");

    let result = match cli.command {
        Commands::Report { dataset, config, format, output } => {
            report::cmd_report(dataset, config, format, output)
        }
        Commands::Validate { dataset, config } => report::cmd_validate(dataset, config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn runtime(msg: impl Into<String>) -> Self {
        Self { code: exit_codes::EXIT_RUNTIME, message: msg.into(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<ReportError> for CliError {
    fn from(err: ReportError) -> Self {
        let hint = match &err {
            ReportError::MalformedData(_) => Some(
                "dataset needs non-empty 'sellers', 'products' and 'purchase_records' lists".to_string(),
            ),
            ReportError::ConfigValidation(_) => {
                Some("bonus rates are fractions between 0 and 1 (0.15 = 15%)".to_string())
            }
            _ => None,
        };
        Self { code: report_exit_code(&err), message: err.to_string(), hint }
    }
}
