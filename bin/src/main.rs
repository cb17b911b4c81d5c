//! Balanza CLI binary.
//!
//! Provides command-line interface for the Balanza ratio calculator.

mod cmd;
mod input;
mod logging;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use std::process;

#[derive(Parser)]
#[command(name = "balanza")]
#[command(about = "Liquidity and solvency ratios from a balance sheet", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute, classify and print the four ratios
    Calc(cmd::calc::CalcArgs),

    /// List available ratios
    Ratios {
        /// Filter by category (liquidity or leverage)
        #[arg(short, long)]
        category: Option<String>,

        /// Show formulas and threshold tables
        #[arg(long)]
        detailed: bool,
    },

    /// List recognised currency codes
    Currencies,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", error_message(&e));
        process::exit(1);
    }
}

/// One-line error report including every context layer and its cause.
fn error_message(e: &anyhow::Error) -> String {
    format!("Error: {e:#}")
}

fn run() -> Result<()> {
    // A missing .env file is not an error
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Calc(args) => {
            cmd::calc::run(&args, Local::now().date_naive(), &mut stdout)?;
        }
        Commands::Ratios { category, detailed } => {
            cmd::ratios::list_ratios(category.as_deref(), detailed, &mut stdout)?;
        }
        Commands::Currencies => {
            cmd::currencies::list_currencies(&mut stdout)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calc() {
        let cli = Cli::try_parse_from([
            "balanza",
            "-v",
            "calc",
            "--current-assets",
            "150",
            "--current-liabilities",
            "-100",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        let Commands::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        assert_eq!(args.current_assets.as_deref(), Some("150"));
        assert_eq!(args.current_liabilities.as_deref(), Some("-100"));
    }

    #[test]
    fn test_error_message_includes_cause() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inputs.json");
        std::fs::write(&path, r#"{"report_date": "31/12/2025"}"#).unwrap();

        let cli = Cli::try_parse_from(["balanza", "calc", "--input", path.to_str().unwrap()])
            .unwrap();
        let Commands::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        let today = chrono::NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let err = cmd::calc::run(&args, today, &mut Vec::new()).unwrap_err();

        let message = error_message(&err);
        assert!(message.starts_with("Error: failed to parse input file"));
        assert!(message.contains("input contains invalid characters at line 1 column 28"));
    }

    #[test]
    fn test_parse_ratios() {
        let cli = Cli::try_parse_from(["balanza", "ratios", "--category", "leverage"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Ratios { category: Some(ref c), detailed: false } if c == "leverage"
        ));
    }
}
