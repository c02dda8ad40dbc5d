//! HTML serialization, mostly for snapshots and debugging.

use crate::document::Document;
use crate::element::NodeId;

impl Document {
    /// Serialize the whole document (the body and everything under it).
    pub fn to_html(&self) -> String {
        self.node_html(self.body())
    }

    /// Serialize a single subtree. Unknown nodes serialize to an empty string.
    pub fn node_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_node(node, &mut out);
        out
    }

    fn write_node(&self, node: NodeId, out: &mut String) {
        let Some(element) = self.get(node) else {
            return;
        };

        out.push('<');
        out.push_str(&element.tag);
        if !element.classes.is_empty() {
            push_attribute(out, "class", &element.classes.join(" "));
        }
        for (name, value) in &element.attributes {
            push_attribute(out, name, value);
        }
        out.push('>');

        if let Some(text) = &element.text {
            out.push_str(&escape(text));
        }
        for &child in self.children(node) {
            self.write_node(child, out);
        }

        out.push_str("</");
        out.push_str(&element.tag);
        out.push('>');
    }
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}
