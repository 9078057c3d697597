use core::fmt;

use crate::NodeId;

// Hand-written impls instead of `#[derive(thiserror::Error)]`: thiserror
// unconditionally treats a field named `source` as the error source, which
// would require `NodeId: std::error::Error`.
#[derive(Debug, PartialEq)]
pub enum Error {
    UnknownNode(NodeId),
    DuplicateNode(NodeId),
    NegativeWeight {
        from: NodeId,
        to: NodeId,
        weight: f64,
    },
    UnreachableTarget {
        source: NodeId,
        target: NodeId,
    },
    MissingLink {
        from: NodeId,
        to: NodeId,
    },
    AmbiguousLink {
        from: NodeId,
        to: NodeId,
        count: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownNode(id) => write!(f, "Unknown node id {id}"),
            Error::DuplicateNode(id) => write!(f, "Duplicate node id {id}"),
            Error::NegativeWeight { from, to, weight } => {
                write!(f, "Negative weight {weight} on edge {from} -> {to}")
            }
            Error::UnreachableTarget { source, target } => {
                write!(f, "No path from node {source} to node {target}")
            }
            Error::MissingLink { from, to } => {
                write!(f, "No link connects node {from} to node {to}")
            }
            Error::AmbiguousLink { from, to, count } => {
                write!(f, "{count} links connect node {from} to node {to}")
            }
        }
    }
}

impl std::error::Error for Error {}
