//! Routing queries over a [`RoadNetwork`]

pub mod dijkstra;
pub mod links;

use serde::Serialize;

use crate::{
    Error, LinkId, NodeId, TravelTime,
    model::{NodeIndex, RoadNetwork},
};

/// Result of a point-to-point routing query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Total travel time along the route
    pub travel_time: TravelTime,
    /// Traversed nodes, source first, target last
    pub nodes: Vec<NodeId>,
    /// Traversed link ids, one per consecutive node pair
    pub links: Vec<LinkId>,
}

/// Minimum-travel-time route between two nodes, with the traversed
/// physical links resolved from the per-node catalogs.
///
/// `source == target` yields a zero-cost single-node route with no links.
///
/// # Errors
///
/// `UnknownNode` when either endpoint is not part of the network,
/// `UnreachableTarget` when no path exists, and `MissingLink` /
/// `AmbiguousLink` when the link catalogs do not identify exactly one
/// link for some pair of consecutive route nodes.
pub fn shortest_path(
    network: &RoadNetwork,
    source: NodeId,
    target: NodeId,
) -> Result<Route, Error> {
    let (source_idx, target_idx) = validate_query(network, source, target)?;
    let (travel_time, index_path) = dijkstra::dijkstra_path(network, source_idx, target_idx)?;
    let links = links::resolve_links(network, &index_path)?;
    let nodes = index_path.iter().map(|&idx| network.node_id(idx)).collect();

    Ok(Route {
        travel_time,
        nodes,
        links,
    })
}

/// Minimum travel time between two nodes, without tracing the route.
///
/// # Errors
///
/// `UnknownNode` when either endpoint is not part of the network,
/// `UnreachableTarget` when no path exists.
pub fn shortest_travel_time(
    network: &RoadNetwork,
    source: NodeId,
    target: NodeId,
) -> Result<TravelTime, Error> {
    let (source_idx, target_idx) = validate_query(network, source, target)?;
    dijkstra::dijkstra_path_weight(network, source_idx, target_idx)
}

fn validate_query(
    network: &RoadNetwork,
    source: NodeId,
    target: NodeId,
) -> Result<(NodeIndex, NodeIndex), Error> {
    let source_idx = network.index_of(source).ok_or(Error::UnknownNode(source))?;
    let target_idx = network.index_of(target).ok_or(Error::UnknownNode(target))?;
    Ok((source_idx, target_idx))
}
