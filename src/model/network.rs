//! Immutable routing network built from a sparse edge-weight mapping

use hashbrown::HashMap;
use log::debug;

use crate::{Error, LinkCatalog, NodeId, TravelTime, model::RoadNode};

/// Dense node index used internally by the search state.
pub type NodeIndex = usize;

/// Directed road network with travel-time weights and per-node link catalogs.
///
/// Built once from the caller's sparse representation and never mutated by
/// queries, so one network can serve any number of searches. Node ids are
/// mapped to dense indices in the order they appear in `node_ids`; that
/// order is also the documented tie-break order of the search.
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    nodes: Vec<RoadNode>,
    index: HashMap<NodeId, NodeIndex>,
    /// Forward star: outgoing `(target, weight)` pairs per node,
    /// sorted by target index for deterministic relaxation order
    edges: Vec<Vec<(NodeIndex, TravelTime)>>,
    edge_count: usize,
}

impl RoadNetwork {
    /// Builds a network from a node id list, a sparse `(from, to) -> weight`
    /// mapping and per-node link catalogs.
    ///
    /// The inputs are consumed into a dense internal representation; any
    /// map or pair sequence works. Nodes without a catalog entry get empty
    /// catalogs. If the same `(from, to)` pair is supplied twice, the
    /// smaller weight is kept.
    ///
    /// # Errors
    ///
    /// `DuplicateNode` if a node id is listed twice, `UnknownNode` if an
    /// edge or catalog references an id missing from `node_ids`, and
    /// `NegativeWeight` if any edge weight is below zero.
    pub fn new(
        node_ids: impl IntoIterator<Item = NodeId>,
        edge_weights: impl IntoIterator<Item = ((NodeId, NodeId), TravelTime)>,
        link_catalogs: impl IntoIterator<Item = (NodeId, LinkCatalog)>,
    ) -> Result<Self, Error> {
        let node_ids = node_ids.into_iter();
        let mut index = HashMap::with_capacity(node_ids.size_hint().0);
        let mut nodes = Vec::with_capacity(node_ids.size_hint().0);

        for id in node_ids {
            if index.insert(id, nodes.len()).is_some() {
                return Err(Error::DuplicateNode(id));
            }
            nodes.push(RoadNode {
                id,
                links: LinkCatalog::default(),
            });
        }

        for (id, catalog) in link_catalogs {
            let idx = *index.get(&id).ok_or(Error::UnknownNode(id))?;
            nodes[idx].links = catalog;
        }

        let mut edges: Vec<Vec<(NodeIndex, TravelTime)>> = vec![Vec::new(); nodes.len()];
        for ((from, to), weight) in edge_weights {
            if weight < 0.0 {
                return Err(Error::NegativeWeight { from, to, weight });
            }
            let from_idx = *index.get(&from).ok_or(Error::UnknownNode(from))?;
            let to_idx = *index.get(&to).ok_or(Error::UnknownNode(to))?;
            edges[from_idx].push((to_idx, weight));
        }

        // Map iteration order is arbitrary; sort so relaxation scans are
        // reproducible across runs. Repeated pairs collapse to the
        // cheapest edge.
        for targets in &mut edges {
            targets.sort_unstable_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));
            targets.dedup_by_key(|&mut (to, _)| to);
        }

        let edge_count = edges.iter().map(Vec::len).sum();
        debug!(
            "Road network built: {} nodes, {} edges",
            nodes.len(),
            edge_count
        );

        Ok(RoadNetwork {
            nodes,
            index,
            edges,
            edge_count,
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Dense index of an external node id.
    pub fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
        self.index.get(&id).copied()
    }

    /// External id of a dense index.
    pub fn node_id(&self, idx: NodeIndex) -> NodeId {
        self.nodes[idx].id
    }

    /// Link catalog of a node.
    pub fn links(&self, idx: NodeIndex) -> &LinkCatalog {
        &self.nodes[idx].links
    }

    /// Outgoing `(target, weight)` pairs of a node, ascending by target.
    pub fn edges(&self, idx: NodeIndex) -> &[(NodeIndex, TravelTime)] {
        &self.edges[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_EDGES: [((NodeId, NodeId), TravelTime); 0] = [];
    const NO_LINKS: [(NodeId, LinkCatalog); 0] = [];

    #[test]
    fn builds_dense_indices_in_input_order() {
        let network = RoadNetwork::new([10, 20, 30], [((10, 20), 1.5)], NO_LINKS).unwrap();

        assert_eq!(network.node_count(), 3);
        assert_eq!(network.edge_count(), 1);
        assert_eq!(network.index_of(10), Some(0));
        assert_eq!(network.index_of(30), Some(2));
        assert_eq!(network.node_id(1), 20);
        assert_eq!(network.edges(0), &[(1, 1.5)]);
        assert!(network.edges(1).is_empty());
    }

    #[test]
    fn repeated_pair_keeps_cheaper_edge() {
        let network = RoadNetwork::new([1, 2], [((1, 2), 3.0), ((1, 2), 2.0)], NO_LINKS).unwrap();
        assert_eq!(network.edge_count(), 1);
        assert_eq!(network.edges(0), &[(1, 2.0)]);
    }

    #[test]
    fn rejects_duplicate_node() {
        let err = RoadNetwork::new([1, 2, 1], NO_EDGES, NO_LINKS).unwrap_err();
        assert_eq!(err, Error::DuplicateNode(1));
    }

    #[test]
    fn rejects_edge_with_unknown_endpoint() {
        let err = RoadNetwork::new([1, 2], [((1, 99), 1.0)], NO_LINKS).unwrap_err();
        assert_eq!(err, Error::UnknownNode(99));
    }

    #[test]
    fn rejects_negative_weight() {
        let err = RoadNetwork::new([1, 2], [((1, 2), -0.5)], NO_LINKS).unwrap_err();
        assert_eq!(
            err,
            Error::NegativeWeight {
                from: 1,
                to: 2,
                weight: -0.5
            }
        );
    }

    #[test]
    fn rejects_catalog_for_unknown_node() {
        let err =
            RoadNetwork::new([1, 2], NO_EDGES, [(7, LinkCatalog::new([1], [2]))]).unwrap_err();
        assert_eq!(err, Error::UnknownNode(7));
    }
}
