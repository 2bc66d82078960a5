use serde::{Deserialize, Serialize};

/// stored straight-line distance from a tract to its nearest entrance along with
/// the tract attributes carried through to classification outputs.
///
/// `nearest_distance_ft` is infinite when there were no entrances to measure to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TractDistance {
    pub tract_id: String,
    pub nearest_distance_ft: f64,
    pub nearest_entrance_id: Option<String>,
    pub population: u64,
    pub median_income: Option<f64>,
}
