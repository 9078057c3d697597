pub mod regular_dijkstra;
pub mod traced_dijkstra;

mod state;

pub(crate) use regular_dijkstra::dijkstra_path_weight;
pub(crate) use traced_dijkstra::dijkstra_path;
