use super::TractDistance;
use serde::{Deserialize, Serialize};

/// transit desert classification of one tract at one distance threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesertFlag {
    pub tract_id: String,
    pub nearest_distance_ft: f64,
    pub is_desert: bool,
    pub threshold_used: f64,
    pub population: u64,
    pub median_income: Option<f64>,
}

/// flags a tract as a transit desert when its nearest entrance is strictly farther
/// than `threshold` feet. a tract exactly at the threshold is served.
///
/// classification only reads the stored distance, so it can be repeated for any
/// number of thresholds without measuring again.
pub fn classify(distance: &TractDistance, threshold: f64) -> DesertFlag {
    DesertFlag {
        tract_id: distance.tract_id.clone(),
        nearest_distance_ft: distance.nearest_distance_ft,
        is_desert: distance.nearest_distance_ft > threshold,
        threshold_used: threshold,
        population: distance.population,
        median_income: distance.median_income,
    }
}
