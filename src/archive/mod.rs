//! Distribution archive creation.
//!
//! One deflated zip per target, containing the staging directory's immediate
//! files stored by filename only. The directory itself is never an entry:
//! extracting into a folder must deposit `{binary, wrapper}` directly there,
//! not one level down. Unix-family entries carry mode `0o755` so extractors
//! that honor entry modes restore the executable bit.

use std::io::Write;
use std::path::{Path, PathBuf};

use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::error::ArchiveError;
use crate::platform::{PlatformFamily, TargetPlatform};

/// Archive a target's staging directory into the release directory.
///
/// Returns the path of the written archive. Entry order is sorted by filename
/// so archive contents are deterministic across runs.
pub fn archive_platform(
    target: TargetPlatform,
    staging_dir: &Path,
    release_dir: &Path,
) -> Result<PathBuf, ArchiveError> {
    let archive_path = release_dir.join(target.archive_name());
    let file = std::fs::File::create(&archive_path).map_err(|source| ArchiveError::Write {
        path: archive_path.clone(),
        source,
    })?;
    let mut zip = ZipWriter::new(file);

    let mut options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    if target.family() == PlatformFamily::Unix {
        options = options.unix_permissions(0o755);
    }

    for entry in walkdir::WalkDir::new(staging_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ArchiveError::Walk {
            path: staging_dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let contents =
            std::fs::read(entry.path()).map_err(|source| ArchiveError::ReadEntry {
                path: entry.path().to_path_buf(),
                source,
            })?;

        zip.start_file(name.as_str(), options).map_err(|source| ArchiveError::Zip {
            path: archive_path.clone(),
            source,
        })?;
        zip.write_all(&contents).map_err(|source| ArchiveError::Write {
            path: archive_path.clone(),
            source,
        })?;
        log::debug!("added {} ({} bytes)", name, contents.len());
    }

    zip.finish().map_err(|source| ArchiveError::Zip {
        path: archive_path.clone(),
        source,
    })?;

    log::info!("wrote archive {}", archive_path.display());
    Ok(archive_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staged_dir(files: &[(&str, &[u8])]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, contents) in files {
            std::fs::write(dir.path().join(name), contents).unwrap();
        }
        dir
    }

    #[test]
    fn entries_are_flat_filenames() {
        let staging = staged_dir(&[
            ("mcp-bridge.exe", b"binary".as_slice()),
            ("install.bat", b"@echo off\r\n".as_slice()),
        ]);
        let release = tempfile::tempdir().unwrap();

        let path =
            archive_platform(TargetPlatform::WindowsAmd64, staging.path(), release.path())
                .unwrap();

        let mut archive = zip::ZipArchive::new(std::fs::File::open(&path).unwrap()).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert_eq!(names, vec!["install.bat", "mcp-bridge.exe"]);
        assert!(names.iter().all(|n| !n.contains('/')));
    }

    #[test]
    fn subdirectories_are_not_descended_into() {
        let staging = staged_dir(&[("mcp-bridge-mac", b"binary".as_slice())]);
        std::fs::create_dir(staging.path().join("nested")).unwrap();
        std::fs::write(staging.path().join("nested/stray"), b"ignored").unwrap();
        let release = tempfile::tempdir().unwrap();

        let path =
            archive_platform(TargetPlatform::MacosArm64, staging.path(), release.path()).unwrap();

        let archive = zip::ZipArchive::new(std::fs::File::open(&path).unwrap()).unwrap();
        assert_eq!(archive.len(), 1);
    }

    #[test]
    fn unix_entries_carry_exec_mode() {
        let staging = staged_dir(&[
            ("mcp-bridge-mac", b"binary".as_slice()),
            ("install.command", b"#!/bin/bash\n".as_slice()),
        ]);
        let release = tempfile::tempdir().unwrap();

        let path =
            archive_platform(TargetPlatform::MacosArm64, staging.path(), release.path()).unwrap();

        let mut archive = zip::ZipArchive::new(std::fs::File::open(&path).unwrap()).unwrap();
        for i in 0..archive.len() {
            let entry = archive.by_index(i).unwrap();
            assert_eq!(entry.unix_mode().unwrap() & 0o777, 0o755);
        }
    }

    #[test]
    fn contents_round_trip() {
        let staging = staged_dir(&[("mcp-bridge.exe", b"\x4d\x5a payload".as_slice())]);
        let release = tempfile::tempdir().unwrap();

        let path =
            archive_platform(TargetPlatform::WindowsAmd64, staging.path(), release.path())
                .unwrap();

        let mut archive = zip::ZipArchive::new(std::fs::File::open(&path).unwrap()).unwrap();
        let mut entry = archive.by_name("mcp-bridge.exe").unwrap();
        let mut contents = Vec::new();
        std::io::Read::read_to_end(&mut entry, &mut contents).unwrap();
        assert_eq!(contents, b"\x4d\x5a payload");
    }

    #[test]
    fn unwritable_release_dir_names_the_archive_path() {
        let staging = staged_dir(&[("mcp-bridge.exe", b"binary".as_slice())]);
        let missing = staging.path().join("no-such-dir");

        let err = archive_platform(TargetPlatform::WindowsAmd64, staging.path(), &missing)
            .unwrap_err();
        let ArchiveError::Write { path, .. } = err else {
            panic!("expected Write error, got {err:?}");
        };
        assert!(path.ends_with("mcp-tool-windows.zip"));
    }
}
