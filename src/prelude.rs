// Re-export key components
pub use crate::error::Error;
pub use crate::model::{LinkCatalog, RoadNetwork, RoadNode};
pub use crate::routing::{Route, shortest_path, shortest_travel_time};

// Core identifier and weight types
pub use crate::LinkId;
pub use crate::NodeId;
pub use crate::TravelTime;
