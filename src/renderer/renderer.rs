use crate::parser::*;
use crate::renderer::components::*;

/// Walks a forest of declaration records and emits one text block per
/// surviving top-level record, in source order.
///
/// Rendering is a pure function of the forest and the minimum access level:
/// no input mutation, no hidden state, and no errors. Nodes that fall below
/// the minimum level or that cannot be rendered standalone are dropped
/// silently together with their subtree; diagnostics are a caller concern.
pub struct TreeRenderer;

impl TreeRenderer {
    pub fn render(&self, forest: &[DeclarationRecord], minimum: AccessLevel) -> Vec<String> {
        forest
            .iter()
            .filter_map(|record| self.render_record(record, minimum))
            .collect()
    }

    fn render_record(&self, record: &DeclarationRecord, minimum: AccessLevel) -> Option<String> {
        // Synthetic grouping nodes (the top-of-file root) have no kind and
        // contribute no wrapper of their own.
        if record.kind.is_none() {
            return Some(self.render(&record.children, minimum).join("\n"));
        }

        // Enum case lists carry no meaningful access level or signature of
        // their own; only the element names matter. Flatten one level deep.
        if record.is_enum_case_group() {
            let cases: Vec<String> = record
                .children
                .iter()
                .filter_map(|case| case.name.as_deref())
                .map(|name| format!("case {}", name))
                .collect();
            return Some(cases.join("\n"));
        }

        // Nested declarations inherit visibility context from their enclosing
        // container, so dropping a node drops its whole subtree.
        if record.access < minimum {
            return None;
        }

        let signature = record.signature.as_deref()?;

        let doc_renderer = DocRenderer;
        let mut block = String::new();
        block.push_str(&doc_renderer.render_docs(record.documentation.as_ref()));
        block.push_str(signature);

        // Only container kinds expose nested members; anything else keeps its
        // body opaque even when the producer reported children.
        if !record.children.is_empty() && record.is_container_kind() {
            block.push_str(" {\n\n");
            block.push_str(&self.render(&record.children, minimum).join("\n"));
            block.push_str("\n}\n");
        } else {
            block.push('\n');
        }

        Some(block)
    }
}
