//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `compare`: Report top-level keys present in only one of two translation files
//! - `scan`: List the translation keys used in a source tree
//! - `init`: Initialize a trkeys configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Compare(cmd)) => cmd.common.verbose,
            Some(Command::Scan(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CompareCommand {
    /// First translation file, e.g. assets/translations/en.json
    pub first: PathBuf,

    /// Second translation file, e.g. assets/translations/tr.json
    pub second: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// Source root directory, e.g. lib
    pub root: PathBuf,

    /// Source file extension (overrides config file)
    #[arg(long)]
    pub extension: Option<String>,

    /// Paths (relative to ROOT) or glob patterns to skip, added to the config file's ignores
    /// Can be specified multiple times: --ignore generated --ignore "**/*.g.dart"
    #[arg(long)]
    pub ignore: Vec<String>,

    /// Abort on the first file that cannot be read or decoded
    #[arg(long)]
    pub strict: bool,

    /// Follow symbolic links while walking the source tree
    #[arg(long)]
    pub follow_links: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report keys present in only one of two JSON translation files
    Compare(CompareCommand),
    /// List translation keys used via "key".tr() in a source tree
    Scan(ScanCommand),
    /// Initialize a new .trkeysrc.json configuration file
    Init,
}
