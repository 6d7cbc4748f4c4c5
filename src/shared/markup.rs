//! Escaping and indentation helpers shared by the HTML, XML and RDF/XML
//! emitters.

const INDENT: &str = "  ";

/// Escapes text for use as element content or a double-quoted attribute value.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Line buffer that indents two spaces per nesting level
#[derive(Debug, Default)]
pub struct MarkupWriter {
    buffer: String,
}

impl MarkupWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a raw line at the given depth; `text` is not escaped
    pub fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    /// `<name>text</name>` with escaped text
    pub fn text_element(&mut self, depth: usize, name: &str, text: &str) {
        self.line(depth, &format!("<{0}>{1}</{0}>", name, escape(text)));
    }

    /// Empty element carrying an `rdf:resource` reference
    pub fn resource(&mut self, depth: usize, name: &str, uri: &str) {
        self.line(depth, &format!(r#"<{} rdf:resource="{}"/>"#, name, escape(uri)));
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}
