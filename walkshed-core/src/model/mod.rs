mod edge;
mod point_of_interest;
mod tract_polygon;
mod vertex;
mod vertex_id;

pub use edge::Edge;
pub use point_of_interest::PointOfInterest;
pub use tract_polygon::TractPolygon;
pub use vertex::Vertex;
pub use vertex_id::{EdgeId, VertexId};
