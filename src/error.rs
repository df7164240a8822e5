//! Error types for the distribution packaging pipeline.
//!
//! The taxonomy mirrors the pipeline stages one-to-one: precondition checks,
//! cross-compilation, wrapper generation, permission normalization, and
//! archiving. Every failure is fatal and propagates to the pipeline
//! controller; nothing is retried.

use std::path::PathBuf;
use thiserror::Error;

use crate::platform::TargetPlatform;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, DistError>;

/// Main error type for all packaging operations
#[derive(Error, Debug)]
pub enum DistError {
    /// Environment/setup problems detected before any work starts
    #[error("precondition failed: {0}")]
    Precondition(#[from] PreconditionError),

    /// Toolchain returned failure for a target platform
    #[error("build failed: {0}")]
    Build(#[from] BuildError),

    /// Filesystem failure while generating a wrapper script
    #[error("wrapper generation failed: {0}")]
    Wrapper(#[from] WrapperError),

    /// Failure while normalizing executable permission bits
    #[error("permission normalization failed: {0}")]
    Permission(#[from] PermissionError),

    /// Failure while producing a distribution archive
    #[error("archive creation failed: {0}")]
    Archive(#[from] ArchiveError),

    /// IO errors not tied to a specific pipeline stage
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Problems with the build environment, detected by the validate stage
#[derive(Error, Debug)]
pub enum PreconditionError {
    /// Source module directory does not exist
    #[error("client module directory not found: {path}")]
    ModuleNotFound {
        /// Path where the module was expected
        path: PathBuf,
    },

    /// Build descriptor file missing from the module root
    #[error("build descriptor not found: {path}")]
    DescriptorMissing {
        /// Path where go.mod was expected
        path: PathBuf,
    },

    /// Compiler toolchain not found on PATH
    #[error("'{program}' not found on PATH: {source}")]
    ToolchainMissing {
        /// Name of the toolchain binary
        program: String,
        /// Lookup error from PATH search
        #[source]
        source: which::Error,
    },
}

/// Cross-compilation failures for one target platform
#[derive(Error, Debug)]
pub enum BuildError {
    /// The toolchain process could not be spawned at all
    #[error("failed to invoke '{command}' for {target}: {source}")]
    Invoke {
        /// Command that failed to start
        command: String,
        /// Target platform being built
        target: TargetPlatform,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// The toolchain ran and exited non-zero
    #[error("go build failed for {target}: {diagnostics}")]
    Failed {
        /// Target platform being built
        target: TargetPlatform,
        /// Captured toolchain diagnostics (stderr, or stdout if stderr was empty)
        diagnostics: String,
    },
}

/// Filesystem failures while writing a wrapper script
#[derive(Error, Debug)]
pub enum WrapperError {
    /// Could not write the wrapper script file
    #[error("failed to write wrapper {path}: {source}")]
    Write {
        /// Path of the wrapper being written
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

/// Failures while setting executable permission bits
#[derive(Error, Debug)]
pub enum PermissionError {
    /// chmod failed, typically because the file is missing
    #[error("failed to mark {path} executable: {source}")]
    Chmod {
        /// File that could not be updated
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

/// Failures while producing a distribution archive
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Could not enumerate the staging directory
    #[error("failed to read staging directory {path}: {source}")]
    Walk {
        /// Staging directory being archived
        path: PathBuf,
        /// Underlying traversal error
        #[source]
        source: walkdir::Error,
    },

    /// Could not read a staged file into the archive
    #[error("failed to read staged file {path}: {source}")]
    ReadEntry {
        /// File that could not be read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Could not create or write the archive file itself
    #[error("failed to write archive {path}: {source}")]
    Write {
        /// Archive path being written
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The zip encoder rejected an entry or the finish step failed
    #[error("zip error while writing {path}: {source}")]
    Zip {
        /// Archive path being written
        path: PathBuf,
        /// Underlying zip error
        #[source]
        source: zip::result::ZipError,
    },
}

impl DistError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            DistError::Precondition(PreconditionError::ModuleNotFound { path }) => vec![
                format!("Check that the client module exists at {}", path.display()),
                "Run from the repository root, or pass --module-root".to_string(),
            ],
            DistError::Precondition(PreconditionError::DescriptorMissing { path }) => vec![
                format!("Expected a Go module descriptor at {}", path.display()),
                "Run 'go mod init' in the client directory if it was never initialized"
                    .to_string(),
            ],
            DistError::Precondition(PreconditionError::ToolchainMissing { program, .. }) => vec![
                format!("Install {program} 1.22+ and ensure it is on PATH"),
                format!("Verify with '{program} version'"),
            ],
            DistError::Build(BuildError::Failed { .. }) => vec![
                "Fix the compiler errors shown above; the diagnostics are verbatim".to_string(),
                "Confirm the module builds natively with 'go build ./...'".to_string(),
            ],
            DistError::Permission(_) => vec![
                "Check that the staging directory was not removed mid-run".to_string(),
                "Verify filesystem permissions on the dist directory".to_string(),
            ],
            DistError::Archive(_) => vec![
                "Check free disk space and write permissions on the release directory"
                    .to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
