use anyhow::Result;

use super::super::args::CompareCommand;
use super::{CommandResult, CommandSummary, CompareSummary};
use crate::core::compare_files;

pub fn compare(cmd: CompareCommand) -> Result<CommandResult> {
    let diff = compare_files(&cmd.first, &cmd.second)?;

    Ok(CommandResult {
        summary: CommandSummary::Compare(CompareSummary {
            first: cmd.first,
            second: cmd.second,
            diff,
        }),
        format: cmd.common.format,
        config_file: None,
    })
}
