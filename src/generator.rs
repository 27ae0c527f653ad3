use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::assembler::InterfaceAssembler;
use crate::formatter::{ExternalFormatter, SourceFormatter};
use crate::parser::AccessLevel;
use crate::producer::{DeclarationProducer, SourceKittenProducer};
use crate::renderer::TreeRenderer;

pub const GENERATED_FILE_SUFFIX: &str = ".generated.swift";
pub const FALLBACK_MODULE_NAME: &str = "Unknown";

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Module to document; when absent the import header is empty and the
    /// output filename falls back to [`FALLBACK_MODULE_NAME`].
    pub module: Option<String>,
    /// Folder the generated interface is written to.
    pub output: PathBuf,
    /// Declarations below this level are filtered out.
    pub minimum_access_level: AccessLevel,
    /// Delete a previously generated file before generating.
    pub clean_first: bool,
    /// Passed through to the compiler invocation unchanged.
    pub compiler_args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanOutcome {
    Removed(PathBuf),
    NotFound(PathBuf),
}

/// Path the generated interface for `module` lives at under `output`.
pub fn interface_path(output: &Path, module: Option<&str>) -> PathBuf {
    let module = match module {
        Some(name) if !name.is_empty() => name,
        _ => FALLBACK_MODULE_NAME,
    };
    output.join(format!("{}{}", module, GENERATED_FILE_SUFFIX))
}

/// Facade wiring producer, renderer, assembler, formatter and the filesystem.
pub struct InterfaceGenerator {
    producer: Box<dyn DeclarationProducer>,
    formatter: Box<dyn SourceFormatter>,
}

impl InterfaceGenerator {
    pub fn new() -> Self {
        Self::with_collaborators(
            Box::new(SourceKittenProducer::new()),
            Box::new(ExternalFormatter::new()),
        )
    }

    pub fn with_collaborators(
        producer: Box<dyn DeclarationProducer>,
        formatter: Box<dyn SourceFormatter>,
    ) -> Self {
        Self {
            producer,
            formatter,
        }
    }

    /// Runs the full pipeline and returns the path of the written file.
    pub fn generate(&self, options: &GenerateOptions) -> Result<PathBuf> {
        if options.clean_first {
            self.clean(&options.output, options.module.as_deref())?;
        }

        let forest = self
            .producer
            .declarations(options.module.as_deref(), &options.compiler_args)
            .context("could not parse module declarations")?;

        let blocks = TreeRenderer.render(&forest, options.minimum_access_level);
        debug!(
            blocks = blocks.len(),
            minimum = %options.minimum_access_level,
            "rendered interface blocks"
        );

        let module_name = options.module.as_deref().unwrap_or("");
        let assembled = InterfaceAssembler.assemble(&blocks, module_name);

        let formatted = self
            .formatter
            .format(&assembled)
            .context("formatting the assembled interface failed")?;

        fs::create_dir_all(&options.output).with_context(|| {
            format!("could not create output folder {}", options.output.display())
        })?;

        let path = interface_path(&options.output, options.module.as_deref());
        fs::write(&path, formatted)
            .with_context(|| format!("could not write {}", path.display()))?;

        info!(path = %path.display(), "wrote generated interface");
        Ok(path)
    }

    /// Deletes a previously generated file. A missing file is not an error;
    /// only actual I/O failures are.
    pub fn clean(&self, output: &Path, module: Option<&str>) -> Result<CleanOutcome> {
        let path = interface_path(output, module);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("could not delete {}", path.display()))?;
            Ok(CleanOutcome::Removed(path))
        } else {
            Ok(CleanOutcome::NotFound(path))
        }
    }
}

impl Default for InterfaceGenerator {
    fn default() -> Self {
        Self::new()
    }
}
