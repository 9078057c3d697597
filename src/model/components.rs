//! Road network components - nodes and their link catalogs

use hashbrown::HashSet;

use crate::{LinkId, NodeId};

/// Physical link ids entering and leaving one node.
///
/// The link traversed between two consecutive path nodes `a -> b` is the
/// unique element of `outgoing(a) ∩ incoming(b)`.
#[derive(Debug, Clone, Default)]
pub struct LinkCatalog {
    /// Links leaving this node
    pub outgoing: HashSet<LinkId>,
    /// Links entering this node
    pub incoming: HashSet<LinkId>,
}

impl LinkCatalog {
    pub fn new(
        outgoing: impl IntoIterator<Item = LinkId>,
        incoming: impl IntoIterator<Item = LinkId>,
    ) -> Self {
        LinkCatalog {
            outgoing: outgoing.into_iter().collect(),
            incoming: incoming.into_iter().collect(),
        }
    }
}

/// Road graph node
#[derive(Debug, Clone)]
pub struct RoadNode {
    /// External id of the node
    pub id: NodeId,
    /// Link ids entering and leaving the node
    pub links: LinkCatalog,
}
