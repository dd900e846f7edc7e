use thiserror::Error;

use crate::document::NodeId;

/// Errors raised by document tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// The node handle does not belong to this document.
    #[error("node not found: {0}")]
    NotFound(NodeId),

    /// A reference node was expected to be a child of `parent`.
    #[error("{child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },

    /// The insertion would produce an invalid tree.
    #[error("cannot insert {child} into {parent}: {reason}")]
    HierarchyRequest {
        parent: NodeId,
        child: NodeId,
        reason: &'static str,
    },

    /// The selector uses syntax outside the supported subset.
    #[error("unsupported selector: {0}")]
    UnsupportedSelector(String),
}
