use crate::document::{Document, NodeId};
use crate::error::DomError;

const VOID_ELEMENTS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

/// Serialize `node` and its subtree as HTML, indented two spaces per level.
pub fn to_html(doc: &Document, node: NodeId) -> Result<String, DomError> {
    let mut out = String::new();
    write_node(doc, node, 0, &mut out)?;
    Ok(out)
}

fn write_node(doc: &Document, node: NodeId, depth: usize, out: &mut String) -> Result<(), DomError> {
    let tag = doc.tag(node)?;
    let indent = "  ".repeat(depth);

    out.push_str(&format!("{indent}<{tag}"));
    for (name, value) in doc.attributes(node)? {
        out.push_str(&format!(" {}=\"{}\"", name, escape(value)));
    }
    out.push('>');

    if VOID_ELEMENTS.iter().any(|v| *v == tag) {
        out.push('\n');
        return Ok(());
    }

    let children = doc.children(node)?;
    let text = doc.own_text(node)?.map(escape);
    if children.is_empty() {
        out.push_str(&format!("{}</{tag}>\n", text.unwrap_or_default()));
        return Ok(());
    }

    out.push('\n');
    if let Some(text) = text {
        out.push_str(&format!("{indent}  {text}\n"));
    }
    for child in children {
        write_node(doc, *child, depth + 1, out)?;
    }
    out.push_str(&format!("{indent}</{tag}>\n"));
    Ok(())
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
