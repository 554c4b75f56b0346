//! # SplitBill CLI
//!
//! Command-line front end for `splitbill-core`.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  bill.json / stdin ──► BillInput ──► split_bill() ──► text / JSON       │
//! │                           ▲                                             │
//! │                  --tip overrides tipRate                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Input Format
//! ```json
//! {
//!   "date": "2024-03-21",
//!   "location": "開心小館",
//!   "tipRate": 1000,
//!   "items": [
//!     { "kind": "shared",   "name": "牛排", "price": 8200 },
//!     { "kind": "personal", "name": "橙汁", "price": 1000, "person": "Alice" }
//!   ]
//! }
//! ```
//! Prices are cents and `tipRate` is basis points (1000 = 10%).

pub mod config;
pub mod render;

use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use splitbill_core::validation::validate_tip_percentage;
use splitbill_core::{split_bill, BillInput};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub use config::{CliConfig, ConfigError, OutputFormat};

/// Split a restaurant bill between the people who ate it.
#[derive(Debug, Parser)]
#[command(name = "splitbill", version, about)]
pub struct Cli {
    /// Bill JSON file; reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Config file (defaults to the platform config directory).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, short, value_enum)]
    pub output: Option<OutputFormat>,

    /// Tip percentage, overriding the bill's `tipRate` (e.g. 10 or 12.5).
    /// Kept to two decimals: 12.345 is applied as 12.35.
    #[arg(long, value_name = "PERCENT", allow_negative_numbers = true)]
    pub tip: Option<f64>,
}

/// Parses arguments, loads configuration and prints the split bill.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_tracing(&config);
    debug!(path = ?cli.config, ?config, "Configuration loaded");

    let raw = read_input(cli.input.as_deref())?;
    let rendered = execute(&cli, &config, &raw)?;
    print!("{}", rendered);

    Ok(())
}

/// Splits the bill in `raw` and renders it per `cli` and `config`.
pub fn execute(cli: &Cli, config: &CliConfig, raw: &str) -> anyhow::Result<String> {
    let mut input: BillInput = serde_json::from_str(raw).context("Failed to parse bill JSON")?;

    if let Some(pct) = cli.tip {
        input.tip_rate = validate_tip_percentage(pct).context("Invalid --tip")?;
        debug!(bps = input.tip_rate.bps(), "Tip overridden from command line");
    }

    let output = split_bill(&input)?;
    info!(
        participants = output.items.len(),
        total = %output.total_amount,
        "Bill split"
    );

    let rendered = match cli.output.unwrap_or(config.output) {
        OutputFormat::Text => render::render_text(&output, &config.currency_symbol),
        OutputFormat::Json => render::render_json(&output)?,
    };

    Ok(rendered)
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read bill from {}", path.display())),
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read bill from stdin")?;
            Ok(raw)
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages, including every share
/// - Otherwise the configured `log_filter` (default `warn,splitbill=info`)
///
/// Logs go to stderr; stdout carries only the bill. Colour is only used
/// when stderr is a terminal.
fn init_tracing(config: &CliConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitbill_core::BillError;

    const BILL: &str = r#"{
        "date": "2024-03-21",
        "location": "開心小館",
        "tipRate": 1000,
        "items": [
            { "kind": "shared", "name": "牛排", "price": 8200 },
            { "kind": "personal", "name": "橙汁", "price": 1000, "person": "Alice" },
            { "kind": "personal", "name": "熱檸檬水", "price": 800, "person": "Bob" }
        ]
    }"#;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("splitbill").chain(args.iter().copied()))
    }

    #[test]
    fn test_execute_text() {
        let text = execute(&cli(&[]), &CliConfig::default(), BILL).unwrap();
        assert!(text.contains("Total        $110.0"));
        assert!(text.contains("Alice        $56.1"));
    }

    #[test]
    fn test_execute_json_from_flag() {
        let json = execute(&cli(&["--output", "json"]), &CliConfig::default(), BILL).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["totalAmount"], 11000);
        assert_eq!(value["items"][1]["name"], "Bob");
    }

    #[test]
    fn test_tip_flag_overrides_input() {
        let json = execute(&cli(&["--tip", "0", "-o", "json"]), &CliConfig::default(), BILL).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tip"], 0);
        assert_eq!(value["items"][0]["amount"], 5100);
    }

    #[test]
    fn test_negative_tip_flag_is_rejected() {
        assert!(execute(&cli(&["--tip", "-5"]), &CliConfig::default(), BILL).is_err());
    }

    #[test]
    fn test_split_errors_are_preserved() {
        let raw = r#"{ "date": "2024-03-21", "location": "", "items": [] }"#;
        let err = execute(&cli(&[]), &CliConfig::default(), raw).unwrap_err();
        assert_eq!(err.downcast_ref::<BillError>(), Some(&BillError::NoParticipants));
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let err = execute(&cli(&[]), &CliConfig::default(), "{").unwrap_err();
        assert!(err.to_string().contains("Failed to parse bill JSON"));
    }
}
