use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use tracing::debug;

#[cfg(test)]
use mockall::automock;

/// Post-processing source formatter. On failure the assembled text is not
/// silently substituted; the error is surfaced to the caller and nothing is
/// written to disk.
#[cfg_attr(test, automock)]
pub trait SourceFormatter {
    fn format(&self, text: &str) -> Result<String>;
}

/// Formatter that pipes the assembled text through an external command
/// (stdin to stdout), `swiftformat` by default.
pub struct ExternalFormatter {
    command: String,
}

impl ExternalFormatter {
    pub fn new() -> Self {
        Self {
            command: "swiftformat".to_string(),
        }
    }

    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for ExternalFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceFormatter for ExternalFormatter {
    fn format(&self, text: &str) -> Result<String> {
        debug!(command = %self.command, "formatting assembled interface");
        let mut child = Command::new(&self.command)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to run '{}'", self.command))?;

        let mut stdin = child
            .stdin
            .take()
            .with_context(|| format!("could not open stdin of '{}'", self.command))?;
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("could not write to '{}'", self.command))?;
        drop(stdin);

        let output = child
            .wait_with_output()
            .with_context(|| format!("failed to wait for '{}'", self.command))?;

        if !output.status.success() {
            anyhow::bail!(
                "'{}' exited with {}: {}",
                self.command,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        String::from_utf8(output.stdout)
            .with_context(|| format!("'{}' emitted non-UTF-8 output", self.command))
    }
}
