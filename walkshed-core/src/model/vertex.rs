use super::VertexId;
use geo::Coord;

/// a network vertex in a planar projected coordinate system measured in feet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub vertex_id: VertexId,
    pub coordinate: Coord<f64>,
}

impl Vertex {
    pub fn new(vertex_id: i64, x: f64, y: f64) -> Vertex {
        Vertex {
            vertex_id: VertexId(vertex_id),
            coordinate: Coord { x, y },
        }
    }

    pub fn x(&self) -> f64 {
        self.coordinate.x
    }

    pub fn y(&self) -> f64 {
        self.coordinate.y
    }
}
