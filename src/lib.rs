//! swiface extracts the public-facing declaration surface of a Swift module
//! from a SourceKitten-produced declaration tree and re-renders it as
//! readable, filtered source text.
//!
//! The pipeline runs producer -> parser -> renderer -> assembler -> formatter:
//! `sourcekitten doc` supplies a nested tree of declaration records, the
//! renderer filters it by minimum access level and serializes the survivors
//! back into nested source text, and the assembled result is piped through an
//! external formatter before being written to disk.

pub mod assembler;
pub mod formatter;
pub mod generator;
pub mod parser;
pub mod producer;
pub mod renderer;


pub use assembler::InterfaceAssembler;
pub use formatter::{ExternalFormatter, SourceFormatter};
pub use generator::{
    interface_path, CleanOutcome, GenerateOptions, InterfaceGenerator, FALLBACK_MODULE_NAME,
    GENERATED_FILE_SUFFIX,
};
pub use parser::{AccessLevel, DeclarationParser, DeclarationRecord, RawDeclaration};
pub use producer::{DeclarationProducer, SourceKittenProducer};
pub use renderer::TreeRenderer;
