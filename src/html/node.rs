//! Presentation tree node types.

/// A child of an [`HtmlNode`]: a nested element or a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlChild {
    Element(HtmlNode),
    Text(String),
}

/// A node in the presentation tree.
///
/// Each node carries an output tag (`div`, `span`, `section`, `article`,
/// `a`, `img`, `h1`-`h4`, `br`, ...), a CSS class list, attributes and
/// ordered children. Attribute keys are either literal HTML attributes
/// (`href`, `src`, `id`, `lang`) or `data-*` copies of source attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlNode {
    pub tag: String,
    pub class: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<HtmlChild>,
}

impl HtmlNode {
    /// Create a node with no class, attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: String::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a node with a class list.
    pub fn with_class(tag: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: class.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any existing value for the same key.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(k, _)| *k == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    /// Look up an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Append a child element.
    pub fn push(&mut self, child: HtmlNode) {
        self.children.push(HtmlChild::Element(child));
    }

    /// Append a text run.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(HtmlChild::Text(text.into()));
    }

    /// Concatenated text of this node's descendants, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                HtmlChild::Text(text) => out.push_str(text),
                HtmlChild::Element(node) => node.collect_text(out),
            }
        }
    }

    /// Depth-first search for the first descendant with the given tag.
    pub fn find(&self, tag: &str) -> Option<&HtmlNode> {
        for child in &self.children {
            if let HtmlChild::Element(node) = child {
                if node.tag == tag {
                    return Some(node);
                }
                if let Some(found) = node.find(tag) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Depth-first search for the first descendant with the given class list.
    pub fn find_class(&self, class: &str) -> Option<&HtmlNode> {
        for child in &self.children {
            if let HtmlChild::Element(node) = child {
                if node.class == class {
                    return Some(node);
                }
                if let Some(found) = node.find_class(class) {
                    return Some(found);
                }
            }
        }
        None
    }
}
