mod adjacency;
mod graph_integrity_error;
mod topology_builder;
mod walk_graph;

pub use adjacency::Adjacency;
pub use graph_integrity_error::GraphIntegrityError;
pub use topology_builder::{TopologyBuilder, TopologyResult};
pub use walk_graph::Graph;
