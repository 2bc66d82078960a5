use super::{EdgeId, VertexId};

/// an undirected network segment. `length_ft` is the walking cost of traversing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub edge_id: EdgeId,
    pub src_vertex_id: VertexId,
    pub dst_vertex_id: VertexId,
    pub length_ft: f64,
}

impl Edge {
    pub fn new(edge_id: i64, src_vertex_id: i64, dst_vertex_id: i64, length_ft: f64) -> Edge {
        Edge {
            edge_id: EdgeId(edge_id),
            src_vertex_id: VertexId(src_vertex_id),
            dst_vertex_id: VertexId(dst_vertex_id),
            length_ft,
        }
    }
}
