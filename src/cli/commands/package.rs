//! Package command implementation.
//!
//! Runs the full pipeline: validate, cross-compile every declared target,
//! generate wrappers, normalize permissions, and archive.

use crate::cli::{Args, Command, OutputManager};
use crate::error::Result;
use crate::pipeline::{DistConfig, Pipeline};
use crate::platform::TargetPlatform;
use crate::toolchain::GoToolchain;

/// Execute the package command
pub(super) async fn execute_package(args: &Args, output: &OutputManager) -> Result<()> {
    let Command::Package {
        url,
        module_root,
        entry_package,
        dist_dir,
        release_dir,
    } = &args.command
    else {
        unreachable!("execute_package called with non-Package command");
    };

    let config = DistConfig {
        module_root: module_root.clone(),
        entry_package: entry_package.clone(),
        dist_dir: dist_dir.clone(),
        release_dir: release_dir.clone(),
        install_url: url.clone(),
    };

    output.step(&format!(
        "Packaging {} from {} for {} platforms",
        config.entry_package,
        config.module_root.display(),
        TargetPlatform::ALL.len()
    ));

    let toolchain = GoToolchain::new(&config.entry_package);
    let pipeline = Pipeline::new(config, toolchain);
    let report = pipeline.run().await?;

    for archive in &report.archives {
        output.indent(&archive.display().to_string());
    }
    output.success(&format!(
        "Release complete: {}",
        report.release_dir.display()
    ));
    Ok(())
}
