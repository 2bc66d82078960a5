use geo::MultiPolygon;

/// census tract geometry and the demographic attributes carried through to
/// the desert classification outputs. `median_income` is absent when the
/// census marks the estimate as unavailable.
#[derive(Debug, Clone, PartialEq)]
pub struct TractPolygon {
    pub id: String,
    pub geometry: MultiPolygon<f64>,
    pub population: u64,
    pub median_income: Option<f64>,
}
