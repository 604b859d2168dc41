//! DOM Node
//!
//! Nodes link to each other through `NodeId`s into the arena rather than
//! pointers, so the tree can be mutated without reference counting.

use crate::{CssStyleDeclaration, InternedString, NodeId};

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if detached or root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag: InternedString) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: String) -> Self {
        Self::with_data(NodeData::Text(content))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Whether this node may have children
    pub(crate) fn accepts_children(&self) -> bool {
        !matches!(self.data, NodeData::Text(_))
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Tag name
    pub tag: InternedString,
    /// Class list, in attribute order, without duplicates
    pub classes: Vec<InternedString>,
    /// Inline `style` declaration
    pub style: CssStyleDeclaration,
}

impl ElementData {
    pub fn new(tag: InternedString) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            style: CssStyleDeclaration::new(),
        }
    }

    /// Whether the element carries a class
    #[inline]
    pub fn has_class(&self, class: InternedString) -> bool {
        self.classes.contains(&class)
    }

    /// Add a class if not already present
    pub fn add_class(&mut self, class: InternedString) {
        if class != InternedString::EMPTY && !self.has_class(class) {
            self.classes.push(class);
        }
    }

    /// Remove a class, returning whether it was present
    pub fn remove_class(&mut self, class: InternedString) -> bool {
        let before = self.classes.len();
        self.classes.retain(|&c| c != class);
        self.classes.len() != before
    }
}
