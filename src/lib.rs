//! # mcp-bridge distribution packaging
//!
//! Release-packaging pipeline for the mcp-bridge desktop client. Given the
//! buildable Go module under `client/`, it produces one installable archive
//! per supported platform so non-technical users can download a zip,
//! double-click one file, and end up with the client installed and
//! registered.
//!
//! ## Pipeline
//!
//! - **Validate**: module root, `go.mod`, and the Go toolchain must exist
//! - **Build**: cross-compile with `GOOS`/`GOARCH` and CGO disabled
//! - **Wrap**: generate a double-clickable installer script per platform
//! - **Normalize**: executable bits for Unix-family targets
//! - **Archive**: flat zip of binary + wrapper per platform
//!
//! Every failure is fatal and aborts the run; partial releases are never
//! reported as success.
//!
//! ## Usage
//!
//! ```bash
//! mcp_bridge_dist package --url http://localhost:8080/sse
//! mcp_bridge_dist validate
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod archive;
pub mod cli;
pub mod error;
pub mod permissions;
pub mod pipeline;
pub mod platform;
pub mod toolchain;
pub mod wrapper;

// Re-export main types for public API
pub use cli::Args;
pub use error::{DistError, Result};
pub use pipeline::{DistConfig, DistReport, Pipeline};
pub use platform::{PlatformFamily, TargetPlatform};
pub use toolchain::{GoToolchain, Toolchain};
