use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;

use super::state::State;
use crate::{
    Error, TravelTime,
    model::{NodeIndex, RoadNetwork},
};

/// Dijkstra's algorithm toward a single target, tracing the optimal path.
///
/// Returns the total travel time and the node index sequence from `source`
/// to `target` inclusive. Nodes are settled in ascending cost order, equal
/// costs broken toward the smaller node index; once settled, a node's
/// distance and predecessor are final. Stale heap entries stand in for
/// decrease-key.
pub(crate) fn dijkstra_path(
    network: &RoadNetwork,
    source: NodeIndex,
    target: NodeIndex,
) -> Result<(TravelTime, Vec<NodeIndex>), Error> {
    let node_count = network.node_count();
    let mut dist = vec![TravelTime::INFINITY; node_count];
    let mut predecessor: Vec<Option<NodeIndex>> = vec![None; node_count];
    let mut settled = FixedBitSet::with_capacity(node_count);
    let mut heap = BinaryHeap::new();

    // Start node has distance 0
    dist[source] = 0.0;
    heap.push(State {
        cost: 0.0,
        node: source,
    });

    while let Some(State { cost, node }) = heap.pop() {
        // Skip stale entries for already settled nodes
        if settled.contains(node) {
            continue;
        }
        settled.insert(node);

        if node == target {
            return Ok((cost, reconstruct_path(&predecessor, source, target)));
        }

        // Examine neighbors
        for &(next, weight) in network.edges(node) {
            if settled.contains(next) {
                continue;
            }
            let next_cost = cost + weight;
            if next_cost < dist[next] {
                dist[next] = next_cost;
                predecessor[next] = Some(node);
                heap.push(State {
                    cost: next_cost,
                    node: next,
                });
            }
        }
    }

    // Heap drained before the target was settled
    Err(Error::UnreachableTarget {
        source: network.node_id(source),
        target: network.node_id(target),
    })
}

/// Follow predecessors backward from target to source, then reverse.
fn reconstruct_path(
    predecessor: &[Option<NodeIndex>],
    source: NodeIndex,
    target: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        match predecessor[current] {
            Some(prev) => {
                path.push(prev);
                current = prev;
            }
            // Unreachable for settled targets; predecessors are recorded
            // before a node can enter the heap.
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LinkCatalog, NodeId};

    fn network(edges: &[(i64, i64, f64)], nodes: &[i64]) -> RoadNetwork {
        let weights = edges.iter().map(|&(from, to, weight)| ((from, to), weight));
        let no_links: [(NodeId, LinkCatalog); 0] = [];
        RoadNetwork::new(nodes.iter().copied(), weights, no_links).unwrap()
    }

    #[test]
    fn direct_edge() {
        let net = network(&[(1, 2, 5.0)], &[1, 2]);
        let (cost, path) = dijkstra_path(&net, 0, 1).unwrap();
        assert_eq!(cost, 5.0);
        assert_eq!(path, vec![0, 1]);
    }

    #[test]
    fn detour_beats_direct_edge() {
        let net = network(&[(1, 2, 1.0), (2, 3, 1.0), (1, 3, 5.0)], &[1, 2, 3]);
        let (cost, path) = dijkstra_path(&net, 0, 2).unwrap();
        assert_eq!(cost, 2.0);
        assert_eq!(path, vec![0, 1, 2]);
    }

    #[test]
    fn source_equals_target() {
        let net = network(&[(1, 2, 1.0)], &[1, 2]);
        let (cost, path) = dijkstra_path(&net, 0, 0).unwrap();
        assert_eq!(cost, 0.0);
        assert_eq!(path, vec![0]);
    }

    #[test]
    fn unreachable_target_is_an_error() {
        // 3 has no incoming edges
        let net = network(&[(1, 2, 1.0)], &[1, 2, 3]);
        let err = dijkstra_path(&net, 0, 2).unwrap_err();
        assert_eq!(
            err,
            Error::UnreachableTarget {
                source: 1,
                target: 3
            }
        );
    }

    #[test]
    fn equal_costs_settle_earlier_listed_node_first() {
        // Two equal-cost routes 1->2->4 and 1->3->4; node 2 is listed
        // before node 3, so the reported path runs through 2.
        let net = network(
            &[(1, 2, 2.0), (1, 3, 2.0), (2, 4, 2.0), (3, 4, 2.0)],
            &[1, 2, 3, 4],
        );
        let (cost, path) = dijkstra_path(&net, 0, 3).unwrap();
        assert_eq!(cost, 4.0);
        assert_eq!(path, vec![0, 1, 3]);
    }
}
