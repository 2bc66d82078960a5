use crate::model::{EdgeId, VertexId};

/// one entry of a vertex's adjacency list. since the walking network is
/// undirected, every edge appears in the lists of both of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjacency {
    pub neighbor: VertexId,
    pub edge_id: EdgeId,
    pub weight: f64,
    /// dense index of the neighbor in the graph's vertex storage
    pub(crate) neighbor_index: usize,
}
