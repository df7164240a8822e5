//! Toolchain invocation for cross-compiling the client module.
//!
//! The pipeline talks to the compiler through the narrow [`Toolchain`] trait
//! so tests can substitute a double that never spawns a process. The
//! production implementation shells out to `go build` with the target's
//! GOOS/GOARCH pair and CGO disabled, which guarantees a self-contained
//! binary with no native-library linkage.

use std::path::Path;

use crate::error::{BuildError, PreconditionError};
use crate::platform::TargetPlatform;

/// Name of the compiler binary looked up on PATH.
const GO_PROGRAM: &str = "go";

/// Compiler capability needed by the pipeline.
///
/// One operation plus an availability probe. Implementations must leave no
/// usable partial binary at `output` when `compile` fails; callers treat the
/// output path as suspect after any error.
#[allow(async_fn_in_trait)]
pub trait Toolchain {
    /// Check that the toolchain is available before any compile is attempted.
    fn probe(&self) -> Result<(), PreconditionError>;

    /// Compile the module at `module_root` for `target`, writing the binary
    /// to `output`.
    async fn compile(
        &self,
        target: TargetPlatform,
        module_root: &Path,
        output: &Path,
    ) -> Result<(), BuildError>;
}

/// Production toolchain: the Go compiler on PATH.
#[derive(Debug, Clone)]
pub struct GoToolchain {
    /// Package path of the client entry point, e.g. `./cmd/mcp-bridge`.
    entry_package: String,
}

impl GoToolchain {
    /// Create a toolchain building the given entry package path.
    pub fn new(entry_package: impl Into<String>) -> Self {
        Self {
            entry_package: entry_package.into(),
        }
    }
}

impl Default for GoToolchain {
    /// Toolchain for the repository's conventional entry package.
    fn default() -> Self {
        Self::new("./cmd/mcp-bridge")
    }
}

impl Toolchain for GoToolchain {
    fn probe(&self) -> Result<(), PreconditionError> {
        match which::which(GO_PROGRAM) {
            Ok(path) => {
                log::debug!("found {} at {}", GO_PROGRAM, path.display());
                Ok(())
            }
            Err(source) => Err(PreconditionError::ToolchainMissing {
                program: GO_PROGRAM.to_string(),
                source,
            }),
        }
    }

    async fn compile(
        &self,
        target: TargetPlatform,
        module_root: &Path,
        output: &Path,
    ) -> Result<(), BuildError> {
        log::info!(
            "GOOS={} GOARCH={} go build -o {} {}",
            target.os(),
            target.arch(),
            output.display(),
            self.entry_package
        );

        let out = tokio::process::Command::new(GO_PROGRAM)
            .current_dir(module_root)
            .env("GOOS", target.os())
            .env("GOARCH", target.arch())
            .env("CGO_ENABLED", "0")
            .args(["build", "-o"])
            .arg(output)
            .arg(&self.entry_package)
            .output()
            .await
            .map_err(|source| BuildError::Invoke {
                command: format!("{GO_PROGRAM} build"),
                target,
                source,
            })?;

        if !out.status.success() {
            return Err(BuildError::Failed {
                target,
                diagnostics: pick_diagnostics(&out.stdout, &out.stderr),
            });
        }

        log::debug!("compiled {} -> {}", target, output.display());
        Ok(())
    }
}

/// Select the toolchain output to surface: stderr, or stdout when stderr is
/// empty (go writes most diagnostics to stderr, but not all).
fn pick_diagnostics(stdout: &[u8], stderr: &[u8]) -> String {
    let err = String::from_utf8_lossy(stderr);
    if err.trim().is_empty() {
        String::from_utf8_lossy(stdout).trim().to_string()
    } else {
        err.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_prefer_stderr() {
        let picked = pick_diagnostics(b"ignored stdout", b"undefined: frobnicate\n");
        assert_eq!(picked, "undefined: frobnicate");
    }

    #[test]
    fn diagnostics_fall_back_to_stdout() {
        let picked = pick_diagnostics(b"package main: no Go files\n", b"   \n");
        assert_eq!(picked, "package main: no Go files");
    }

    #[test]
    fn build_failure_names_the_target() {
        let err = BuildError::Failed {
            target: TargetPlatform::WindowsAmd64,
            diagnostics: "syntax error".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("windows/amd64"));
        assert!(message.contains("syntax error"));
    }
}
