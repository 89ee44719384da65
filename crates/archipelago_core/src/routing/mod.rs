pub mod dijkstra;
pub mod shortest_paths;

pub use dijkstra::shortest_paths;
pub use shortest_paths::ShortestPaths;
