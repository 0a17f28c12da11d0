//! Input tree node types.

/// Unique identifier for a node within a [`Document`](super::Document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The root node ID (always 0).
    pub const ROOT: NodeId = NodeId(0);
}

/// Payload of an input node: a tagged element or a text leaf.
///
/// Element names are qualified Akoma Ntoso local names (`section`, `part`,
/// `ref`, `img`, ...). Attributes keep document order; keys are unique.
#[derive(Debug, Clone)]
pub enum NodeData {
    /// An element with a name and its attributes.
    Element {
        name: String,
        attrs: Vec<(String, String)>,
    },
    /// A text leaf.
    Text(String),
}

/// A node in the input document tree.
///
/// The tree uses a parent-pointer / first-child / next-sibling
/// representation. Parent links exist for ancestor lookup only; ownership
/// always flows downward through the arena.
#[derive(Debug, Clone)]
pub struct Node {
    /// Element or text payload.
    pub data: NodeData,
    /// Parent node (None for root).
    pub parent: Option<NodeId>,
    /// First child node.
    pub first_child: Option<NodeId>,
    /// Next sibling node.
    pub next_sibling: Option<NodeId>,
}

impl Node {
    /// Create a detached element node.
    pub fn element(name: impl Into<String>) -> Self {
        Self {
            data: NodeData::Element {
                name: name.into(),
                attrs: Vec::new(),
            },
            parent: None,
            first_child: None,
            next_sibling: None,
        }
    }

    /// Create a detached text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            data: NodeData::Text(content.into()),
            parent: None,
            first_child: None,
            next_sibling: None,
        }
    }

    /// The element name, or None for text nodes.
    pub fn name(&self) -> Option<&str> {
        match &self.data {
            NodeData::Element { name, .. } => Some(name),
            NodeData::Text(_) => None,
        }
    }

    /// Whether this node is an element.
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element { .. })
    }
}
