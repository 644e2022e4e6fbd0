//! `environment`, `logs` and `rollback`: reserved commands with no behavior yet.

use crate::{error::CliResult, output::OutputManager};

/// Print a notice that `command` is not implemented and succeed.
pub fn execute(command: &str, output: OutputManager) -> CliResult<()> {
    tracing::debug!(command, "placeholder command invoked");
    output.info(&format!("'{command}' is not implemented yet"))?;
    Ok(())
}
