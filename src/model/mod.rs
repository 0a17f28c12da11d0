//! Input document tree.
//!
//! The renderer consumes an already-parsed Akoma Ntoso style tree. This
//! module provides:
//! - An arena-backed [`Document`] holding the tree
//! - Node types ([`Node`], [`NodeData`], [`NodeId`])
//! - Read-only traversal (children, ancestors, attribute lookup)
//! - A constructive API used by hosts to assemble the tree
//!
//! The render walk never mutates the input tree; the constructive API is
//! for the host that owns the `Document` before rendering.
//!
//! # Example
//!
//! ```
//! use aknhtml::model::Document;
//!
//! let mut doc = Document::new("act");
//! let body = doc.append_element(doc.root(), "body");
//! let section = doc.append_element(body, "section");
//! doc.set_attr(section, "id", "sec_1");
//! assert_eq!(doc.attr(section, "id"), Some("sec_1"));
//! ```

mod node;

pub use node::{Node, NodeData, NodeId};

/// An input document as an arena of nodes.
///
/// The tree uses a parent-pointer / first-child / next-sibling
/// representation for efficient traversal and minimal memory overhead
/// (index 0 is always the root element).
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Create a new document whose root element has the given name.
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node::element(root_name)],
        }
    }

    /// Get the root node ID.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The element name of a node, or None for text nodes and unknown IDs.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(Node::name)
    }

    /// Look up an attribute value on an element.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.node(id)?.data {
            NodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            NodeData::Text(_) => None,
        }
    }

    /// All attributes of an element, in document order.
    pub fn attrs(&self, id: NodeId) -> &[(String, String)] {
        match self.node(id).map(|n| &n.data) {
            Some(NodeData::Element { attrs, .. }) => attrs,
            _ => &[],
        }
    }

    /// The content of a text node, or None for elements.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.node(id)?.data {
            NodeData::Text(content) => Some(content),
            NodeData::Element { .. } => None,
        }
    }

    /// Concatenated text of a node's descendants, in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        if let Some(text) = self.text(id) {
            out.push_str(text);
        }
        for child in self.children(id) {
            self.collect_text(child, out);
        }
    }

    /// First child element with the given name.
    pub fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent)
            .find(|&child| self.name(child) == Some(name))
    }

    /// First descendant element with the given name, depth-first.
    pub fn find_descendant(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        for child in self.children(parent) {
            if self.name(child) == Some(name) {
                return Some(child);
            }
            if let Some(found) = self.find_descendant(child, name) {
                return Some(found);
            }
        }
        None
    }

    /// Iterate over children of a node.
    pub fn children(&self, parent: NodeId) -> ChildIter<'_> {
        let first_child = self
            .nodes
            .get(parent.0 as usize)
            .and_then(|n| n.first_child);
        ChildIter {
            doc: self,
            current: first_child,
        }
    }

    /// Iterate over ancestors of a node, nearest first.
    pub fn ancestors(&self, id: NodeId) -> AncestorIter<'_> {
        let parent = self.nodes.get(id.0 as usize).and_then(|n| n.parent);
        AncestorIter {
            doc: self,
            current: parent,
        }
    }

    /// Position of a node among its parent's children (0-based).
    pub fn sibling_index(&self, id: NodeId) -> usize {
        match self.node(id).and_then(|n| n.parent) {
            Some(parent) => self.children(parent).position(|c| c == id).unwrap_or(0),
            None => 0,
        }
    }

    /// Append a new element under a parent and return its ID.
    pub fn append_element(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        let id = self.alloc(Node::element(name));
        self.append_child(parent, id);
        id
    }

    /// Append a new text leaf under a parent and return its ID.
    pub fn append_text(&mut self, parent: NodeId, content: impl Into<String>) -> NodeId {
        let id = self.alloc(Node::text(content));
        self.append_child(parent, id);
        id
    }

    /// Set an attribute on an element, replacing any existing value.
    ///
    /// Silently ignored on text nodes and unknown IDs.
    pub fn set_attr(&mut self, id: NodeId, name: impl Into<String>, value: impl Into<String>) {
        if let Some(NodeData::Element { attrs, .. }) =
            self.nodes.get_mut(id.0 as usize).map(|n| &mut n.data)
        {
            let name = name.into();
            let value = value.into();
            if let Some(slot) = attrs.iter_mut().find(|(k, _)| *k == name) {
                slot.1 = value;
            } else {
                attrs.push((name, value));
            }
        }
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(child_node) = self.nodes.get_mut(child.0 as usize) {
            child_node.parent = Some(parent);
        }

        // Find the last child of parent and append after it.
        match self.nodes.get(parent.0 as usize).and_then(|n| n.first_child) {
            Some(first_child) => {
                let mut current = first_child;
                while let Some(next) = self
                    .nodes
                    .get(current.0 as usize)
                    .and_then(|n| n.next_sibling)
                {
                    current = next;
                }
                if let Some(last) = self.nodes.get_mut(current.0 as usize) {
                    last.next_sibling = Some(child);
                }
            }
            None => {
                if let Some(parent_node) = self.nodes.get_mut(parent.0 as usize) {
                    parent_node.first_child = Some(child);
                }
            }
        }
    }
}

/// Iterator over children of a node.
pub struct ChildIter<'a> {
    doc: &'a Document,
    current: Option<NodeId>,
}

impl<'a> Iterator for ChildIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = self
            .doc
            .nodes
            .get(current.0 as usize)
            .and_then(|n| n.next_sibling);
        Some(current)
    }
}

/// Iterator over ancestors of a node, nearest first.
pub struct AncestorIter<'a> {
    doc: &'a Document,
    current: Option<NodeId>,
}

impl<'a> Iterator for AncestorIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = self
            .doc
            .nodes
            .get(current.0 as usize)
            .and_then(|n| n.parent);
        Some(current)
    }
}
