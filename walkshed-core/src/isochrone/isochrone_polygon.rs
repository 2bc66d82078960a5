use crate::model::VertexId;
use geo::Polygon;

/// the walkshed boundary of a single source vertex in the projected
/// coordinate system of the network. derived from a [crate::search::ReachableSet]
/// and rebuilt whenever the cutoff or concavity changes.
#[derive(Debug, Clone, PartialEq)]
pub struct IsochronePolygon {
    pub source: VertexId,
    pub polygon: Polygon<f64>,
    pub area_sqft: f64,
    /// number of reachable vertices the hull was built from
    pub reachable_vertices: usize,
    /// true if the reachable set was cut short by a search circuit breaker
    pub truncated: bool,
}
