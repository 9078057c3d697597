//! Point-to-point travel time routing over a directed road network.
//!
//! The network is described sparsely: a list of node ids, a
//! `(from, to) -> travel time` mapping holding only the edges that exist,
//! and a per-node catalog of the physical link ids entering and leaving
//! the node. [`shortest_path`] runs a target-directed Dijkstra search over
//! that network and resolves the sequence of link ids traversed between
//! consecutive nodes of the optimal path.

pub mod error;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::{LinkCatalog, RoadNetwork};
pub use routing::{Route, shortest_path, shortest_travel_time};

/// External node identifier, as assigned by the network provider.
pub type NodeId = i64;

/// Physical link identifier. A separate id space from [`NodeId`]:
/// several nodes may be endpoints of the same roadway link.
pub type LinkId = i64;

/// Edge weight and accumulated path cost, in travel time units.
/// Non-negative; summed with plain floating point accumulation.
pub type TravelTime = f64;
