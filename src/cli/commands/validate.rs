//! Validate command implementation.
//!
//! Checks packaging preconditions without creating anything on disk, so it
//! can be run repeatedly before a release.

use crate::cli::{Args, Command, OutputManager};
use crate::error::Result;
use crate::pipeline::validate_preconditions;
use crate::toolchain::GoToolchain;

/// Execute the validate command
pub(super) fn execute_validate(args: &Args, output: &OutputManager) -> Result<()> {
    let Command::Validate { module_root } = &args.command else {
        unreachable!("execute_validate called with non-Validate command");
    };

    output.step(&format!("Validating {}", module_root.display()));

    let toolchain = GoToolchain::default();
    validate_preconditions(module_root, &toolchain)?;

    output.success("Module is buildable and the toolchain is available");
    Ok(())
}
