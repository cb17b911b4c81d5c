//! Calc command implementation.

use crate::input::{load_input_file, parse_date};
use anyhow::{Context, Result};
use balanza_report::{
    Currency, FormState, HtmlRenderer, JsonRenderer, OutputFormat, ReportRenderer, renderer_for,
};
use balanza_traits::Field;
use chrono::NaiveDate;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Arguments for `balanza calc`.
#[derive(Debug, Args)]
pub(crate) struct CalcArgs {
    /// Current assets
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) current_assets: Option<String>,

    /// Current liabilities
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) current_liabilities: Option<String>,

    /// Inventory
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) inventory: Option<String>,

    /// Total assets
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) total_assets: Option<String>,

    /// Total liabilities
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) total_liabilities: Option<String>,

    /// Shareholders' equity
    #[arg(long, visible_alias = "equity", allow_hyphen_values = true)]
    pub(crate) shareholders_equity: Option<String>,

    /// JSON file with any of the fields above; flags take precedence
    #[arg(short, long)]
    pub(crate) input: Option<PathBuf>,

    /// Company name shown on the report
    #[arg(long, env = "BALANZA_COMPANY")]
    pub(crate) company: Option<String>,

    /// Currency code used to annotate amounts (e.g. USD, EUR, MXN)
    #[arg(short, long, env = "BALANZA_CURRENCY")]
    pub(crate) currency: Option<String>,

    /// Report date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub(crate) date: Option<String>,

    /// Output format (text, html or json)
    #[arg(short, long, env = "BALANZA_FORMAT", default_value = "text")]
    pub(crate) format: OutputFormat,

    /// Emit single-line JSON (json format only)
    #[arg(long)]
    pub(crate) compact: bool,

    /// Document title for HTML output
    #[arg(long)]
    pub(crate) title: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,
}

impl CalcArgs {
    fn field_flags(&self) -> [(Field, Option<&str>); 6] {
        [
            (Field::CurrentAssets, self.current_assets.as_deref()),
            (Field::CurrentLiabilities, self.current_liabilities.as_deref()),
            (Field::Inventory, self.inventory.as_deref()),
            (Field::TotalAssets, self.total_assets.as_deref()),
            (Field::TotalLiabilities, self.total_liabilities.as_deref()),
            (Field::ShareholdersEquity, self.shareholders_equity.as_deref()),
        ]
    }

    fn renderer(&self) -> Box<dyn ReportRenderer> {
        match (self.format, &self.title) {
            (OutputFormat::Json, _) if self.compact => Box::new(JsonRenderer::compact()),
            (OutputFormat::Html, Some(title)) => Box::new(HtmlRenderer::with_title(title.clone())),
            (format, _) => renderer_for(format),
        }
    }

    /// Builds the form from the input file (if any) overlaid with flags.
    fn build_form(&self, today: NaiveDate) -> Result<FormState> {
        let mut form = FormState::new(today);

        if let Some(path) = &self.input {
            load_input_file(path)?.apply(&mut form);
        }

        for (field, value) in self.field_flags() {
            if let Some(value) = value {
                form.set_field(field, value);
            }
        }
        if let Some(company) = &self.company {
            form.set_company(company.clone());
        }
        if let Some(currency) = &self.currency {
            form.set_currency(currency.clone());
        }
        if let Some(date) = &self.date {
            form.set_report_date(parse_date(date)?);
        }

        Ok(form)
    }
}

/// Compute the ratios and render the report.
pub(crate) fn run(args: &CalcArgs, today: NaiveDate, out: &mut dyn Write) -> Result<()> {
    let mut form = args.build_form(today)?;

    if form.currency().parse::<Currency>().is_err() {
        warn!(
            currency = form.currency(),
            "unrecognised currency code, amounts will be shown without a symbol"
        );
    }

    form.calculate()?;
    let report = form
        .report()
        .context("calculation succeeded but produced no report")?;

    let renderer = args.renderer();
    match &args.output {
        Some(path) => {
            let mut file = std::fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            renderer.render_to(&report, &mut file)?;
            info!(path = %path.display(), format = %args.format, "report written");
            writeln!(out, "Report written to {}", path.display())?;
        }
        None => renderer.render_to(&report, out)?,
    }

    Ok(())
}
