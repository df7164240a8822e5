//! Command execution coordinating the packaging pipeline.

mod package;
mod validate;

use crate::cli::{Args, Command, OutputManager};
use crate::error::Result;

use package::execute_package;
use validate::execute_validate;

/// Execute the parsed command, returning the process exit code.
pub async fn execute_command(args: Args) -> Result<i32> {
    if let Err(reason) = args.validate() {
        let output = OutputManager::new(false);
        output.error(&format!("Invalid arguments: {reason}"));
        return Ok(2);
    }

    let output = OutputManager::new(args.quiet);

    let result = match &args.command {
        Command::Package { .. } => execute_package(&args, &output).await,
        Command::Validate { .. } => execute_validate(&args, &output),
    };

    match result {
        Ok(()) => Ok(0),
        Err(e) => {
            output.error(&format!("Command '{}' failed: {e}", args.command.name()));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                output.println("\nRecovery suggestions:");
                for suggestion in suggestions {
                    output.indent(&suggestion);
                }
            }
            Ok(1)
        }
    }
}
