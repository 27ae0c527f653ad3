/// Helper for rendering documentation comments
pub struct DocRenderer;

impl DocRenderer {
    pub fn render_docs(&self, docs: Option<&String>) -> String {
        let Some(docs) = docs else {
            return String::new();
        };

        let mut output = String::new();
        for line in docs.lines() {
            if line.trim().is_empty() {
                output.push_str("///\n");
            } else {
                output.push_str(&format!("/// {}\n", line));
            }
        }
        output
    }
}
