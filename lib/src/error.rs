use thiserror::Error;

use crate::names::NodeNum;

/// Errors produced while building or querying a [`Graph`](crate::Graph).
///
/// Absent edges are not errors — they read as infinite cost. These variants
/// cover caller misuse only, and none of them is recoverable into a partial
/// answer.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A new name would be assigned a handle past the declared capacity.
    #[error("node {index} is too big, this graph can only handle {max_nodes} nodes")]
    GraphFull {
        /// The handle the name would have been assigned.
        index: NodeNum,
        /// The capacity the graph was created with.
        max_nodes: usize,
    },
    /// A name was used in a strict lookup before any edge registered it.
    #[error("no node named {name:?} in this graph")]
    UnknownNode {
        /// The offending name.
        name: String,
    },
}
