use serde_json::Value;

use crate::parser::types::*;

const KEY_SUBSTRUCTURE: &str = "key.substructure";

// Parser for converting raw SourceKitten JSON into typed declaration records
pub struct DeclarationParser;

impl DeclarationParser {
    /// Converts a full `sourcekitten doc` document into a forest of records.
    ///
    /// The document is an array of single-entry maps keyed by source file
    /// path. Each file entry becomes one kind-less root record whose children
    /// are the file's top-level declarations. A document that is not an array
    /// yields an empty forest; a malformed node drops that node's subtree.
    pub fn parse_forest(&self, doc: &Value) -> Vec<DeclarationRecord> {
        let Some(entries) = doc.as_array() else {
            return Vec::new();
        };

        entries
            .iter()
            .filter_map(|entry| entry.as_object())
            .flat_map(|file_entry| file_entry.values())
            .map(|file_info| self.parse_file_root(file_info))
            .collect()
    }

    fn parse_file_root(&self, file_info: &Value) -> DeclarationRecord {
        let children = file_info
            .get(KEY_SUBSTRUCTURE)
            .and_then(|nodes| nodes.as_array())
            .map(|nodes| nodes.iter().filter_map(|node| self.parse_node(node)).collect())
            .unwrap_or_default();

        DeclarationRecord::file_root(children)
    }

    fn parse_node(&self, node: &Value) -> Option<DeclarationRecord> {
        let raw: RawDeclaration = serde_json::from_value(node.clone()).ok()?;
        Some(raw.into())
    }
}
