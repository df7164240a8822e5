//! Declared target platforms for distribution packaging.
//!
//! The target set is fixed and small on purpose: these are the platforms the
//! client is shipped to, not a pluggable matrix. Each target carries every
//! name the rest of the pipeline needs — toolchain identifiers, output binary
//! filename, staging directory, wrapper script, and archive filename.
//!
//! | Target | Binary | Wrapper | Archive |
//! |--------|--------|---------|---------|
//! | Windows/amd64 | `mcp-bridge.exe` | `install.bat` | `mcp-tool-windows.zip` |
//! | macOS/arm64 | `mcp-bridge-mac` | `install.command` | `mcp-tool-mac.zip` |

use std::fmt;

/// A supported (operating system, CPU architecture) pair.
///
/// Statically enumerated; see [`TargetPlatform::ALL`] for the declared set.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum TargetPlatform {
    /// Windows on x86-64.
    WindowsAmd64,

    /// macOS on Apple Silicon.
    MacosArm64,
}

/// Platform family, selecting wrapper syntax and permission policy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlatformFamily {
    /// Batch scripts, CRLF line endings, no permission bits.
    Windows,

    /// Shell scripts, LF line endings, executable bits required.
    Unix,
}

impl TargetPlatform {
    /// Every platform a release is packaged for, in build order.
    pub const ALL: &'static [TargetPlatform] =
        &[TargetPlatform::WindowsAmd64, TargetPlatform::MacosArm64];

    /// Operating system identifier passed to the toolchain (GOOS).
    pub fn os(self) -> &'static str {
        match self {
            TargetPlatform::WindowsAmd64 => "windows",
            TargetPlatform::MacosArm64 => "darwin",
        }
    }

    /// Architecture identifier passed to the toolchain (GOARCH).
    pub fn arch(self) -> &'static str {
        match self {
            TargetPlatform::WindowsAmd64 => "amd64",
            TargetPlatform::MacosArm64 => "arm64",
        }
    }

    /// Platform family for wrapper generation and permission handling.
    pub fn family(self) -> PlatformFamily {
        match self {
            TargetPlatform::WindowsAmd64 => PlatformFamily::Windows,
            TargetPlatform::MacosArm64 => PlatformFamily::Unix,
        }
    }

    /// Filename of the compiled client binary inside the staging directory.
    pub fn binary_name(self) -> &'static str {
        match self {
            TargetPlatform::WindowsAmd64 => "mcp-bridge.exe",
            TargetPlatform::MacosArm64 => "mcp-bridge-mac",
        }
    }

    /// Name of this target's staging directory under `dist/`.
    pub fn staging_name(self) -> &'static str {
        match self {
            TargetPlatform::WindowsAmd64 => "win",
            TargetPlatform::MacosArm64 => "mac",
        }
    }

    /// Filename of the generated installer wrapper script.
    pub fn wrapper_name(self) -> &'static str {
        match self.family() {
            PlatformFamily::Windows => "install.bat",
            PlatformFamily::Unix => "install.command",
        }
    }

    /// Filename of this target's distribution archive under `release/`.
    pub fn archive_name(self) -> &'static str {
        match self {
            TargetPlatform::WindowsAmd64 => "mcp-tool-windows.zip",
            TargetPlatform::MacosArm64 => "mcp-tool-mac.zip",
        }
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os(), self.arch())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn declared_set_is_windows_and_macos() {
        assert_eq!(TargetPlatform::ALL.len(), 2);
        assert_eq!(TargetPlatform::ALL[0].to_string(), "windows/amd64");
        assert_eq!(TargetPlatform::ALL[1].to_string(), "darwin/arm64");
    }

    #[test]
    fn family_selects_wrapper_syntax() {
        assert_eq!(
            TargetPlatform::WindowsAmd64.family(),
            PlatformFamily::Windows
        );
        assert_eq!(TargetPlatform::MacosArm64.family(), PlatformFamily::Unix);
        assert_eq!(TargetPlatform::WindowsAmd64.wrapper_name(), "install.bat");
        assert_eq!(TargetPlatform::MacosArm64.wrapper_name(), "install.command");
    }

    #[test]
    fn output_names_are_unique_per_staging_dir() {
        for target in TargetPlatform::ALL {
            assert_ne!(target.binary_name(), target.wrapper_name());
        }
    }

    #[test]
    fn staging_and_archive_names_do_not_collide() {
        let staging: HashSet<_> = TargetPlatform::ALL.iter().map(|t| t.staging_name()).collect();
        let archives: HashSet<_> = TargetPlatform::ALL.iter().map(|t| t.archive_name()).collect();
        assert_eq!(staging.len(), TargetPlatform::ALL.len());
        assert_eq!(archives.len(), TargetPlatform::ALL.len());
    }
}
