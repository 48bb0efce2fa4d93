//! Recursive rendering of arbitrary JSON as nested tables and lists.

use serde_json::Value;
use std::fmt::Write;

/// JSON reshaped for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonNode {
    /// A string, number, boolean or null, already stringified
    Scalar(String),
    List(Vec<JsonNode>),
    /// Object entries in server order
    Table(Vec<(String, JsonNode)>),
}

impl JsonNode {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => JsonNode::Scalar(s.clone()),
            Value::Array(items) => JsonNode::List(items.iter().map(JsonNode::from_value).collect()),
            Value::Object(map) => JsonNode::Table(
                map.iter()
                    .map(|(key, value)| (key.clone(), JsonNode::from_value(value)))
                    .collect(),
            ),
            // null, bool and number print as their JSON text
            other => JsonNode::Scalar(other.to_string()),
        }
    }

    /// Inline text for leaves: scalars, `[]` and `{}`
    fn leaf_text(&self) -> Option<&str> {
        match self {
            JsonNode::Scalar(s) => Some(s.as_str()),
            JsonNode::List(items) if items.is_empty() => Some("[]"),
            JsonNode::Table(entries) if entries.is_empty() => Some("{}"),
            _ => None,
        }
    }
}

/// Render as nested `<table>`, `<ul>` and `<span>` elements.
pub fn render_html(node: &JsonNode) -> String {
    let mut out = String::new();
    write_html(node, &mut out);
    out
}

fn write_html(node: &JsonNode, out: &mut String) {
    if let Some(text) = node.leaf_text() {
        let _ = write!(out, "<span>{}</span>", escape_html(text));
        return;
    }

    match node {
        JsonNode::List(items) => {
            out.push_str("<ul>");
            for item in items {
                out.push_str("<li>");
                write_html(item, out);
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
        JsonNode::Table(entries) => {
            out.push_str("<table><tbody>");
            for (key, value) in entries {
                let _ = write!(out, "<tr><td><strong>{}</strong></td><td>", escape_html(key));
                write_html(value, out);
                out.push_str("</td></tr>");
            }
            out.push_str("</tbody></table>");
        }
        JsonNode::Scalar(_) => {}
    }
}

/// Render as indented `key: value` lines.
pub fn render_text(node: &JsonNode) -> String {
    let mut out = String::new();
    write_text(node, 0, &mut out);
    out
}

fn write_text(node: &JsonNode, depth: usize, out: &mut String) {
    let pad = "  ".repeat(depth);

    if let Some(text) = node.leaf_text() {
        let _ = writeln!(out, "{}{}", pad, text);
        return;
    }

    match node {
        JsonNode::List(items) => {
            for item in items {
                match item.leaf_text() {
                    Some(text) => {
                        let _ = writeln!(out, "{}- {}", pad, text);
                    }
                    None => {
                        let _ = writeln!(out, "{}-", pad);
                        write_text(item, depth + 1, out);
                    }
                }
            }
        }
        JsonNode::Table(entries) => {
            for (key, value) in entries {
                match value.leaf_text() {
                    Some(text) => {
                        let _ = writeln!(out, "{}{}: {}", pad, key, text);
                    }
                    None => {
                        let _ = writeln!(out, "{}{}:", pad, key);
                        write_text(value, depth + 1, out);
                    }
                }
            }
        }
        JsonNode::Scalar(_) => {}
    }
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
