pub mod edge;
pub mod weighted_graph;

pub use edge::Edge;
pub use weighted_graph::Graph;
