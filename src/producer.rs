use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use crate::parser::{DeclarationParser, DeclarationRecord};

#[cfg(test)]
use mockall::automock;

/// Supplies the raw declaration forest for a module. The renderer treats this
/// as an opaque producer; any failure here is fatal for the invocation.
#[cfg_attr(test, automock)]
pub trait DeclarationProducer {
    fn declarations<'m>(
        &self,
        module: Option<&'m str>,
        compiler_args: &[String],
    ) -> Result<Vec<DeclarationRecord>>;
}

/// Producer backed by the `sourcekitten` command line tool.
pub struct SourceKittenProducer {
    binary: String,
    working_dir: PathBuf,
}

impl SourceKittenProducer {
    pub fn new() -> Self {
        Self {
            binary: "sourcekitten".to_string(),
            working_dir: PathBuf::from("."),
        }
    }

    /// Folder the compiler invocation runs in (the module's source folder).
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }
}

impl Default for SourceKittenProducer {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclarationProducer for SourceKittenProducer {
    fn declarations<'m>(
        &self,
        module: Option<&'m str>,
        compiler_args: &[String],
    ) -> Result<Vec<DeclarationRecord>> {
        let mut command = Command::new(&self.binary);
        command.arg("doc");
        command.current_dir(&self.working_dir);
        if let Some(module) = module {
            command.args(["--module-name", module]);
        }
        if !compiler_args.is_empty() {
            command.arg("--");
            command.args(compiler_args);
        }

        debug!(binary = %self.binary, ?module, "running sourcekitten");
        let output = command
            .output()
            .with_context(|| format!("failed to run '{}'", self.binary))?;

        if !output.status.success() {
            anyhow::bail!(
                "'{}' exited with {}: {}",
                self.binary,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let doc: Value = serde_json::from_slice(&output.stdout)
            .with_context(|| format!("'{}' emitted invalid JSON", self.binary))?;

        Ok(DeclarationParser.parse_forest(&doc))
    }
}
