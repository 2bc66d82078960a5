use crate::model::VertexId;

/// result of snapping a point onto the network: the chosen vertex and
/// the straight-line distance to it in feet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnappedPoint {
    pub vertex_id: VertexId,
    pub distance: f64,
}
