//! Road network model
//!
//! Contains the immutable network structure the routing queries run over.

pub mod components;
pub mod network;

pub use components::{LinkCatalog, RoadNode};
pub use network::{NodeIndex, RoadNetwork};
