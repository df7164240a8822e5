//! Executable permission normalization for Unix-family targets.
//!
//! Common archive-extraction tools strip the executable bit, and a shipped
//! `.command` the user cannot double-click is a broken release. After the
//! binary and wrapper are staged, both get mode `0o755`. Windows-family
//! targets have no equivalent concept and are skipped entirely.

use std::path::Path;

use crate::error::PermissionError;
use crate::platform::{PlatformFamily, TargetPlatform};

/// Permission mode applied to staged executables.
const EXEC_MODE: u32 = 0o755;

/// Mark a target's staged binary and wrapper script executable.
///
/// Idempotent: re-applying to already-executable files is a no-op. A missing
/// file is fatal, since it means the staging step did not complete.
pub async fn normalize(
    target: TargetPlatform,
    staging_dir: &Path,
) -> Result<(), PermissionError> {
    if target.family() != PlatformFamily::Unix {
        log::debug!("skipping permission normalization for {target}");
        return Ok(());
    }

    for name in [target.wrapper_name(), target.binary_name()] {
        mark_executable(&staging_dir.join(name)).await?;
    }
    Ok(())
}

/// Set `0o755` on one file.
#[cfg(unix)]
async fn mark_executable(path: &Path) -> Result<(), PermissionError> {
    use std::os::unix::fs::PermissionsExt;

    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(EXEC_MODE))
        .await
        .map_err(|source| PermissionError::Chmod {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("chmod {:o} {}", EXEC_MODE, path.display());
    Ok(())
}

/// On non-Unix build hosts the filesystem has no mode bits to set; the
/// archive entry mode and the wrapper's own `chmod +x` cover extraction.
#[cfg(not(unix))]
async fn mark_executable(path: &Path) -> Result<(), PermissionError> {
    if !path.exists() {
        return Err(PermissionError::Chmod {
            path: path.to_path_buf(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
    }
    log::debug!("no permission bits on this host, skipping {}", path.display());
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    #[tokio::test]
    async fn normalize_sets_exec_bits_on_binary_and_wrapper() {
        let target = TargetPlatform::MacosArm64;
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(target.binary_name()), b"bin").unwrap();
        std::fs::write(dir.path().join(target.wrapper_name()), b"#!/bin/bash\n").unwrap();

        normalize(target, dir.path()).await.unwrap();

        for name in [target.binary_name(), target.wrapper_name()] {
            let mode = std::fs::metadata(dir.path().join(name))
                .unwrap()
                .permissions()
                .mode();
            assert_eq!(mode & 0o777, EXEC_MODE, "wrong mode on {name}");
        }
    }

    #[tokio::test]
    async fn normalize_twice_is_idempotent() {
        let target = TargetPlatform::MacosArm64;
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(target.binary_name()), b"bin").unwrap();
        std::fs::write(dir.path().join(target.wrapper_name()), b"#!/bin/bash\n").unwrap();

        normalize(target, dir.path()).await.unwrap();
        let first = std::fs::metadata(dir.path().join(target.binary_name()))
            .unwrap()
            .permissions()
            .mode();
        normalize(target, dir.path()).await.unwrap();
        let second = std::fs::metadata(dir.path().join(target.binary_name()))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = normalize(TargetPlatform::MacosArm64, dir.path())
            .await
            .unwrap_err();
        let PermissionError::Chmod { path, .. } = err;
        assert!(path.ends_with("install.command") || path.ends_with("mcp-bridge-mac"));
    }

    #[tokio::test]
    async fn windows_family_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        // No staged files at all: skipping means nothing is touched or checked.
        normalize(TargetPlatform::WindowsAmd64, dir.path())
            .await
            .unwrap();
    }
}
