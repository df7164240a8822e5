//! Pipeline controller: validate, build, wrap, archive, report.
//!
//! The run is a linear state machine with no recovery: the first failure
//! aborts everything and propagates to the caller. Targets are processed
//! end-to-end (build, wrapper, permissions) one at a time, and archiving only
//! starts once every target is fully staged. Filesystem side effects are not
//! rolled back on failure; no archive is trustworthy unless the whole run
//! reported success.

use std::path::{Path, PathBuf};

use crate::archive;
use crate::error::{PreconditionError, Result};
use crate::permissions;
use crate::platform::TargetPlatform;
use crate::toolchain::Toolchain;
use crate::wrapper;

/// Build descriptor expected at the module root.
const BUILD_DESCRIPTOR: &str = "go.mod";

/// Configuration for a packaging run.
///
/// The endpoint URL is deliberately a constructor parameter rather than a
/// compiled-in constant; its eventual source is external configuration.
#[derive(Debug, Clone)]
pub struct DistConfig {
    /// Root of the buildable client module.
    pub module_root: PathBuf,
    /// Package path of the client entry point within the module.
    pub entry_package: String,
    /// Parent directory of the per-target staging directories.
    pub dist_dir: PathBuf,
    /// Directory receiving the final archives.
    pub release_dir: PathBuf,
    /// Endpoint URL embedded into every installer wrapper.
    pub install_url: String,
}

impl DistConfig {
    /// Configuration with the repository's conventional layout:
    /// `client/` module, `dist/` staging, `release/` output.
    pub fn new(install_url: impl Into<String>) -> Self {
        Self {
            module_root: PathBuf::from("client"),
            entry_package: "./cmd/mcp-bridge".to_string(),
            dist_dir: PathBuf::from("dist"),
            release_dir: PathBuf::from("release"),
            install_url: install_url.into(),
        }
    }
}

/// Result of a successful packaging run.
#[derive(Debug, Clone)]
pub struct DistReport {
    /// Directory the archives were written to.
    pub release_dir: PathBuf,
    /// One archive per declared target, in build order.
    pub archives: Vec<PathBuf>,
}

/// Check packaging preconditions for a module root without side effects.
///
/// Verifies the module root exists, its build descriptor is present, and the
/// toolchain is available. This is the only pipeline stage reachable without
/// touching the filesystem, so it is safe to call repeatedly.
pub fn validate_preconditions<T: Toolchain>(module_root: &Path, toolchain: &T) -> Result<()> {
    if !module_root.is_dir() {
        return Err(PreconditionError::ModuleNotFound {
            path: module_root.to_path_buf(),
        }
        .into());
    }
    let descriptor = module_root.join(BUILD_DESCRIPTOR);
    if !descriptor.is_file() {
        return Err(PreconditionError::DescriptorMissing { path: descriptor }.into());
    }
    toolchain.probe()?;
    Ok(())
}

/// Orchestrates the packaging stages over a [`Toolchain`].
#[derive(Debug)]
pub struct Pipeline<T: Toolchain> {
    config: DistConfig,
    toolchain: T,
}

impl<T: Toolchain> Pipeline<T> {
    /// Create a pipeline from configuration and a toolchain.
    pub fn new(config: DistConfig, toolchain: T) -> Self {
        Self { config, toolchain }
    }

    /// Check preconditions without side effects.
    ///
    /// Safe to call repeatedly: nothing is created or modified.
    pub fn validate(&self) -> Result<()> {
        validate_preconditions(&self.config.module_root, &self.toolchain)
    }

    /// Execute the full pipeline and report the produced archives.
    pub async fn run(&self) -> Result<DistReport> {
        self.validate()?;

        for &target in TargetPlatform::ALL {
            log::info!("packaging {target}");
            let staging = self.staging_dir(target);
            tokio::fs::create_dir_all(&staging).await?;

            // go resolves a relative -o against its own working directory
            // (the module root), so the output path must be absolute.
            let binary = std::path::absolute(staging.join(target.binary_name()))?;
            self.toolchain
                .compile(target, &self.config.module_root, &binary)
                .await?;

            wrapper::write(&staging, target, &self.config.install_url).await?;
            permissions::normalize(target, &staging).await?;
        }

        tokio::fs::create_dir_all(&self.config.release_dir).await?;
        let mut archives = Vec::with_capacity(TargetPlatform::ALL.len());
        for &target in TargetPlatform::ALL {
            archives.push(archive::archive_platform(
                target,
                &self.staging_dir(target),
                &self.config.release_dir,
            )?);
        }

        Ok(DistReport {
            release_dir: self.config.release_dir.clone(),
            archives,
        })
    }

    /// Staging directory for one target.
    pub fn staging_dir(&self, target: TargetPlatform) -> PathBuf {
        self.config.dist_dir.join(target.staging_name())
    }
}
