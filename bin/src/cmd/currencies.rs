//! Currency listing command implementation.

use anyhow::Result;
use balanza_report::Currency;
use std::io::Write;

/// List recognised currency codes and their display symbols.
pub(crate) fn list_currencies(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{:<6} {:<6} {}", "Code", "Symbol", "Name")?;
    writeln!(out, "{}", "─".repeat(32))?;
    for currency in Currency::ALL {
        writeln!(
            out,
            "{:<6} {:<6} {}",
            currency.to_string(),
            currency.symbol(),
            currency.name()
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Other codes are accepted and shown without a symbol.")?;
    Ok(())
}
