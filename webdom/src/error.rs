//! Error types for document operations.

use crate::element::NodeId;
use crate::selector::SelectorError;

/// Errors returned by tree mutations and selector queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The node was removed from (or never belonged to) this document.
    #[error("node {0:?} does not exist in this document")]
    NodeNotFound(NodeId),

    /// The requested insertion would produce an invalid tree.
    #[error("hierarchy request: {0}")]
    HierarchyRequest(&'static str),

    /// The selector string could not be parsed.
    #[error("invalid selector: {0}")]
    Selector(#[from] SelectorError),
}
