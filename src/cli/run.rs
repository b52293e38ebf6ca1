use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, compare::compare, init::init, scan::scan},
};

/// Dispatch to the handler for the parsed command.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Compare(cmd)) => compare(cmd),
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
