//! Installer wrapper script generation.
//!
//! Each distribution archive carries one double-clickable script that invokes
//! the bundled binary's own `install --url <endpoint>` subcommand. Rendering
//! is a pure function of the target platform and the configured endpoint, so
//! content can be verified without touching disk; writing is a separate step.
//!
//! Line endings follow the *target* platform, not the build host: bash
//! refuses scripts with CRLF endings, and Windows Notepad collapses LF-only
//! files into a single line.

use std::path::{Path, PathBuf};

use crate::error::WrapperError;
use crate::platform::{PlatformFamily, TargetPlatform};

/// Render the wrapper script text for a target.
///
/// The script resolves the sibling binary relative to its own location, so an
/// extracted archive keeps working wherever the user unpacks it.
pub fn render(target: TargetPlatform, endpoint: &str) -> String {
    let binary = target.binary_name();
    match target.family() {
        PlatformFamily::Windows => format!(
            "@echo off\r\n\
             \"%~dp0{binary}\" install --url {endpoint}\r\n\
             pause\r\n"
        ),
        PlatformFamily::Unix => format!(
            "#!/bin/bash\n\
             set -e\n\
             DIR=\"$(cd \"$(dirname \"$0\")\" && pwd)\"\n\
             # zip extraction can drop the executable bit\n\
             chmod +x \"$DIR/{binary}\"\n\
             \"$DIR/{binary}\" install --url {endpoint}\n"
        ),
    }
}

/// Write the wrapper script into a target's staging directory.
///
/// Writes exactly one file and nothing else; the build artifact is untouched.
/// Returns the path of the written script.
pub async fn write(
    staging_dir: &Path,
    target: TargetPlatform,
    endpoint: &str,
) -> Result<PathBuf, WrapperError> {
    let path = staging_dir.join(target.wrapper_name());
    tokio::fs::write(&path, render(target, endpoint))
        .await
        .map_err(|source| WrapperError::Write {
            path: path.clone(),
            source,
        })?;
    log::info!("wrote wrapper {}", path.display());
    Ok(path)
}
