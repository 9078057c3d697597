use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;

use super::state::State;
use crate::{
    Error, TravelTime,
    model::{NodeIndex, RoadNetwork},
};

/// Cost-only variant of the target-directed search.
///
/// Same settle order and tie-break as the traced search, without the
/// predecessor bookkeeping. Cheaper when the caller only needs the travel
/// time, not the route itself.
pub(crate) fn dijkstra_path_weight(
    network: &RoadNetwork,
    source: NodeIndex,
    target: NodeIndex,
) -> Result<TravelTime, Error> {
    let node_count = network.node_count();
    let mut dist = vec![TravelTime::INFINITY; node_count];
    let mut settled = FixedBitSet::with_capacity(node_count);
    let mut heap = BinaryHeap::new();

    dist[source] = 0.0;
    heap.push(State {
        cost: 0.0,
        node: source,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if settled.contains(node) {
            continue;
        }
        settled.insert(node);

        if node == target {
            return Ok(cost);
        }

        for &(next, weight) in network.edges(node) {
            if settled.contains(next) {
                continue;
            }
            let next_cost = cost + weight;
            if next_cost < dist[next] {
                dist[next] = next_cost;
                heap.push(State {
                    cost: next_cost,
                    node: next,
                });
            }
        }
    }

    Err(Error::UnreachableTarget {
        source: network.node_id(source),
        target: network.node_id(target),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LinkCatalog, NodeId};

    #[test]
    fn matches_traced_cost() {
        let weights = [
            ((1, 2), 1.0),
            ((2, 3), 1.0),
            ((1, 3), 5.0),
            ((3, 4), 0.5),
        ];
        let no_links: [(NodeId, LinkCatalog); 0] = [];
        let net = RoadNetwork::new([1, 2, 3, 4], weights, no_links).unwrap();

        let weight = dijkstra_path_weight(&net, 0, 3).unwrap();
        let (traced, _) = crate::routing::dijkstra::dijkstra_path(&net, 0, 3).unwrap();
        assert_eq!(weight, 2.5);
        assert_eq!(weight, traced);
    }
}
