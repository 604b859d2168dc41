//! SEPC DOM - Host document
//!
//! Arena-based DOM tree holding exactly what inline styling needs:
//! elements, their class lists and their inline style declarations.

mod interner;
mod node;
mod style;
mod tree;
mod document;

pub use interner::{InternedString, StringInterner};
pub use node::{ElementData, Node, NodeData};
pub use style::{css_property_name, CssStyleDeclaration};
pub use tree::{Children, Descendants, DomTree};
pub use document::Document;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Whether this ID points at a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Result type for tree mutations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node not found: {0:?}")]
    NotFound(NodeId),
    #[error("Hierarchy request error: cannot insert {child:?} into {parent:?}")]
    HierarchyRequest { parent: NodeId, child: NodeId },
    #[error("Invalid node type for this operation")]
    InvalidNodeType,
}
