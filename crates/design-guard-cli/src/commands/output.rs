//! Shared output formatting for guard results.

use anyhow::Result;
use design_guard_core::LintResult;

use crate::OutputFormat;

/// Print guard results in the specified format.
///
/// A clean result prints nothing in text and compact formats.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    if result.is_clean() {
        return;
    }
    eprint!("{}", result.format_report());
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        eprintln!("{violation}");
    }
}
