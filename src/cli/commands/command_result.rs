use std::path::PathBuf;

use super::super::args::OutputFormat;
use crate::core::{KeyDiffResult, ScanOutcome};

#[derive(Debug)]
pub enum CommandSummary {
    Compare(CompareSummary),
    Scan(ScanOutcome),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CompareSummary {
    pub first: PathBuf,
    pub second: PathBuf,
    pub diff: KeyDiffResult,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a trkeys command, ready to be printed.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub format: OutputFormat,
    /// Configuration file the command ran with, if one was found.
    pub config_file: Option<PathBuf>,
}
