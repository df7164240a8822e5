//! Distribution packaging tool for the mcp-bridge desktop client.
//!
//! Cross-compiles the client for every supported platform, generates
//! installer wrapper scripts, and zips each platform into a flat archive.

use mcp_bridge_dist::cli;
use mcp_bridge_dist::cli::OutputManager;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();

    match cli::run().await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            // Fatal errors are never silenced by --quiet
            let output = OutputManager::new(false);
            output.error(&format!("Fatal error: {e}"));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                output.println("\nRecovery suggestions:");
                for suggestion in suggestions {
                    output.indent(&suggestion);
                }
            }

            process::exit(1);
        }
    }
}
