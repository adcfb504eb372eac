use crate::NodeId;

/// Errors raised by structural document operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The id does not belong to this document.
    #[error("node {0:?} does not exist in this document")]
    NodeNotFound(NodeId),

    /// The operation needs an element but got a text node.
    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),

    /// The reference node is not a child of the given parent.
    #[error("node {child:?} is not a child of {parent:?}")]
    NotAChild { parent: NodeId, child: NodeId },

    /// The node has no parent to insert relative to.
    #[error("node {0:?} is detached")]
    Detached(NodeId),

    /// Inserting would make a node its own ancestor, or give a text node children.
    #[error("cannot insert {child:?} into {parent:?}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    #[error("the document root {0:?} cannot be discarded")]
    DiscardRoot(NodeId),
}
