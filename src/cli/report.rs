//! Report formatting and printing utilities.
//!
//! Results go to stdout, diagnostics to stderr. Kept apart from the core
//! operations so trkeys can be used as a library.

use std::{
    collections::BTreeSet,
    io::{self, Write},
    path::Path,
};

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::{
    args::OutputFormat,
    commands::{CommandResult, CommandSummary, CompareSummary, InitSummary},
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{ScanOutcome, SkippedFile};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(result: &CommandResult, verbose: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    print_to(result, verbose, &mut stdout, &mut stderr)
}

/// Print a command result to custom writers.
pub fn print_to<W: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    if verbose {
        if let Some(path) = &result.config_file {
            writeln!(err, "{} Using config {}", "info:".bold().cyan(), path.display())?;
        }
    }

    match (&result.summary, result.format) {
        (CommandSummary::Compare(summary), OutputFormat::Text) => print_compare(summary, out)?,
        (CommandSummary::Compare(summary), OutputFormat::Json) => print_json(&summary.diff, out)?,
        (CommandSummary::Scan(outcome), OutputFormat::Text) => print_scan(outcome, out)?,
        (CommandSummary::Scan(outcome), OutputFormat::Json) => print_json(outcome, out)?,
        (CommandSummary::Init(summary), _) => print_init(summary, out)?,
    }

    if let CommandSummary::Scan(outcome) = &result.summary {
        print_skipped_warning(&outcome.skipped_files, verbose, err)?;
    }

    Ok(())
}

fn print_compare<W: Write>(summary: &CompareSummary, writer: &mut W) -> io::Result<()> {
    print_key_listing(&summary.first, &summary.diff.only_in_first, writer)?;
    print_key_listing(&summary.second, &summary.diff.only_in_second, writer)
}

fn print_key_listing<W: Write>(
    file: &Path,
    keys: &BTreeSet<String>,
    writer: &mut W,
) -> io::Result<()> {
    let count = keys.len();
    writeln!(
        writer,
        "{} {}: {} {}",
        "Only in".bold(),
        file.display().to_string().bold(),
        count,
        if count == 1 { "key" } else { "keys" }
    )?;
    for key in keys {
        writeln!(writer, "  {}", key)?;
    }
    Ok(())
}

fn print_scan<W: Write>(outcome: &ScanOutcome, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "Found keys count: {}", outcome.count)?;
    for key in outcome.keys.iter() {
        writeln!(writer, "{}", key)?;
    }
    Ok(())
}

fn print_json<T: Serialize, W: Write>(value: &T, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) -> io::Result<()> {
    if summary.created {
        writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        )?;
    }
    Ok(())
}

/// Per-file warnings in verbose mode, otherwise a one-line summary.
fn print_skipped_warning<W: Write>(
    skipped: &[SkippedFile],
    verbose: bool,
    writer: &mut W,
) -> io::Result<()> {
    if skipped.is_empty() {
        return Ok(());
    }

    if verbose {
        for file in skipped {
            writeln!(
                writer,
                "{} Skipped {}: {}",
                "warning:".bold().yellow(),
                file.path,
                file.reason
            )?;
        }
    } else {
        writeln!(
            writer,
            "{} {} file(s) were skipped (use {} for details)",
            "warning:".bold().yellow(),
            skipped.len(),
            "-v".cyan()
        )?;
    }
    Ok(())
}

// ============================================================
// Tests
// ============================================================
