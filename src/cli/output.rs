//! Colored terminal output for packaging runs.
//!
//! Status lines go to stdout and respect `--quiet`; errors always go to
//! stderr. Color is auto-detected per stream.

use std::io::Write;
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Writer for user-facing status and error lines.
pub struct OutputManager {
    stdout: BufferWriter,
    quiet: bool,
}

impl OutputManager {
    /// Create an output manager; `quiet` suppresses everything but errors.
    pub fn new(quiet: bool) -> Self {
        Self {
            stdout: BufferWriter::stdout(ColorChoice::Auto),
            quiet,
        }
    }

    fn emit(&self, glyph: &str, color: Color, bold: bool, message: &str) {
        if self.quiet {
            return;
        }
        let mut buffer = self.stdout.buffer();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
        let _ = write!(&mut buffer, "{glyph}");
        let _ = buffer.reset();
        let _ = writeln!(&mut buffer, " {message}");
        let _ = self.stdout.print(&buffer);
    }

    /// Print a progress line for a pipeline stage.
    pub fn step(&self, message: &str) {
        self.emit("→", Color::Cyan, false, message);
    }

    /// Print a success line.
    pub fn success(&self, message: &str) {
        self.emit("✓", Color::Green, true, message);
    }

    /// Print a warning line.
    pub fn warn(&self, message: &str) {
        self.emit("⚠", Color::Yellow, true, message);
    }

    /// Print an error line to stderr. Always shown, even with `--quiet`.
    pub fn error(&self, message: &str) {
        let stderr = BufferWriter::stderr(ColorChoice::Auto);
        let mut buffer = stderr.buffer();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = write!(&mut buffer, "✗");
        let _ = buffer.reset();
        let _ = writeln!(&mut buffer, " {message}");
        if stderr.print(&buffer).is_err() {
            // Last resort if stderr itself is broken
            println!("✗ {message}");
        }
    }

    /// Print a plain line (respects `--quiet`).
    pub fn println(&self, message: &str) {
        if self.quiet {
            return;
        }
        let mut buffer = self.stdout.buffer();
        let _ = writeln!(&mut buffer, "{message}");
        let _ = self.stdout.print(&buffer);
    }

    /// Print an indented sub-item line.
    pub fn indent(&self, message: &str) {
        self.println(&format!("    {message}"));
    }

    /// Check if quiet mode is enabled.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}
