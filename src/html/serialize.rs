//! Presentation tree → HTML string printer.
//!
//! A simple recursive tag/attribute/children printer. The output tree is
//! the primary product of a render; this printer exists so hosts (and the
//! integration tests) can get markup out without their own walker.

use std::borrow::Cow;

use memchr::{memchr, memchr3};

use super::node::{HtmlChild, HtmlNode};

/// Tags serialized without a closing tag or children.
const VOID_TAGS: &[&str] = &["br", "img", "hr"];

/// Serialize a presentation tree to an HTML string.
pub fn to_html(node: &HtmlNode) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &HtmlNode, out: &mut String) {
    out.push('<');
    out.push_str(&node.tag);

    if !node.class.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&escape_attr(&node.class));
        out.push('"');
    }

    for (name, value) in &node.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }

    if VOID_TAGS.contains(&node.tag.as_str()) {
        out.push_str("/>");
        return;
    }

    out.push('>');
    for child in &node.children {
        match child {
            HtmlChild::Element(elem) => write_node(elem, out),
            HtmlChild::Text(text) => out.push_str(&escape_text(text)),
        }
    }
    out.push_str("</");
    out.push_str(&node.tag);
    out.push('>');
}

/// Escape text content (`&`, `<`, `>`).
///
/// Borrows the input when nothing needs escaping, which is the common case
/// for legal prose.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    if memchr3(b'&', b'<', b'>', s.as_bytes()).is_none() {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape an attribute value (`&`, `<`, `>`, `"`).
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    let bytes = s.as_bytes();
    if memchr3(b'&', b'<', b'>', bytes).is_none() && memchr(b'"', bytes).is_none() {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
