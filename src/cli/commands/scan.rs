use std::env;

use anyhow::Result;

use super::super::args::ScanCommand;
use super::{CommandResult, CommandSummary};
use crate::{
    config::{Config, load_config},
    core::{Error, ScanOptions, scan_usage_keys},
};

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let cwd = env::current_dir().map_err(|source| Error::file_not_found(".", source))?;
    let loaded = load_config(&cwd)?;
    let options = resolve_options(loaded.config, &cmd)?;

    let outcome = scan_usage_keys(&cmd.root, &options)?;

    Ok(CommandResult {
        summary: CommandSummary::Scan(outcome),
        format: cmd.common.format,
        config_file: loaded.path,
    })
}

/// Merge command-line flags over the loaded configuration.
fn resolve_options(mut config: Config, cmd: &ScanCommand) -> Result<ScanOptions> {
    if let Some(extension) = &cmd.extension {
        config.source_extension = extension.clone();
    }
    config.ignores.extend(cmd.ignore.iter().cloned());
    config.strict |= cmd.strict;
    config.follow_links |= cmd.follow_links;

    config.validate()?;
    Ok(config.scan_options())
}
