//! Output formatting for run outcomes and reports.
//!
//! Provides the plain-text status line of a `FileOutcome` and a JSON rendering of `StripReport`.

use std::io::Write;

use crate::report::{FileOutcome, StripReport};

/// Write one outcome as its status line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_outcome(outcome: &FileOutcome, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer, "{}", outcome.format_human_readable())?;
    Ok(())
}

/// Format a `StripReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &StripReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}
