mod snap_failure;
mod snapped_point;
mod vertex_snapper;

pub use snap_failure::SnapFailure;
pub use snapped_point::SnappedPoint;
pub use vertex_snapper::VertexSnapper;
