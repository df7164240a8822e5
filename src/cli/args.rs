//! Command line argument parsing and validation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Distribution packaging tool for the mcp-bridge client
#[derive(Parser, Debug)]
#[command(
    name = "mcp_bridge_dist",
    version,
    about = "Package the mcp-bridge client for end users",
    long_about = "Cross-compile the mcp-bridge client for every supported platform,
generate double-clickable installer wrappers, and zip each platform's
files into a single flat archive under release/.

Usage:
  mcp_bridge_dist package --url http://localhost:8080/sse
  mcp_bridge_dist validate"
)]
pub struct Args {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Suppress status output; errors are always shown
    #[arg(long, global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build, wrap, and archive every declared target platform
    Package {
        /// Endpoint URL embedded into the installer wrappers
        #[arg(long, env = "MCP_BRIDGE_INSTALL_URL", value_name = "URL")]
        url: String,

        /// Root directory of the Go client module
        #[arg(long, default_value = "client", value_name = "DIR")]
        module_root: PathBuf,

        /// Package path of the client entry point within the module
        #[arg(long, default_value = "./cmd/mcp-bridge", value_name = "PKG")]
        entry_package: String,

        /// Parent directory for per-platform staging directories
        #[arg(long, default_value = "dist", value_name = "DIR")]
        dist_dir: PathBuf,

        /// Output directory for the final archives
        #[arg(long, default_value = "release", value_name = "DIR")]
        release_dir: PathBuf,
    },

    /// Check packaging preconditions without building anything
    Validate {
        /// Root directory of the Go client module
        #[arg(long, default_value = "client", value_name = "DIR")]
        module_root: PathBuf,
    },
}

impl Command {
    /// Name of this command for error reporting
    pub fn name(&self) -> &'static str {
        match self {
            Command::Package { .. } => "package",
            Command::Validate { .. } => "validate",
        }
    }
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if let Command::Package { url, .. } = &self.command {
            if url.trim().is_empty() {
                return Err("--url must not be empty".to_string());
            }
        }
        Ok(())
    }
}
