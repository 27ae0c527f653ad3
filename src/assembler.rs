/// Joins rendered top-level blocks under an import header.
pub struct InterfaceAssembler;

impl InterfaceAssembler {
    /// An empty module name still produces an `"import \n\n"` header; callers
    /// that care must supply a non-empty name.
    pub fn assemble(&self, blocks: &[String], module_name: &str) -> String {
        format!("import {}\n\n{}", module_name, blocks.join("\n"))
    }
}
