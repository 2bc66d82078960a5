use super::DesertFlag;
use serde::{Deserialize, Serialize};

/// aggregate statistics of one classification run.
///
/// income means are weighted by tract population and skip tracts with no
/// median income estimate (or no population). a mean is None when no tract
/// in that group contributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesertSummary {
    pub threshold_ft: f64,
    pub tract_count: usize,
    pub desert_count: usize,
    pub total_population: u64,
    pub desert_population: u64,
    pub desert_mean_income: Option<f64>,
    pub served_mean_income: Option<f64>,
}

impl DesertSummary {
    pub fn from_flags(threshold_ft: f64, flags: &[DesertFlag]) -> DesertSummary {
        let (deserts, served): (Vec<&DesertFlag>, Vec<&DesertFlag>) =
            flags.iter().partition(|f| f.is_desert);
        DesertSummary {
            threshold_ft,
            tract_count: flags.len(),
            desert_count: deserts.len(),
            total_population: flags.iter().map(|f| f.population).sum(),
            desert_population: deserts.iter().map(|f| f.population).sum(),
            desert_mean_income: weighted_mean_income(&deserts),
            served_mean_income: weighted_mean_income(&served),
        }
    }

    /// share of the population living in desert tracts, 0 for an empty population
    pub fn desert_population_share(&self) -> f64 {
        if self.total_population == 0 {
            0.0
        } else {
            self.desert_population as f64 / self.total_population as f64
        }
    }
}

fn weighted_mean_income(flags: &[&DesertFlag]) -> Option<f64> {
    let (weighted, weight) = flags
        .iter()
        .filter_map(|f| {
            let income = f.median_income.filter(|i| i.is_finite())?;
            Some((income * f.population as f64, f.population as f64))
        })
        .fold((0.0, 0.0), |(sum, total), (wi, w)| (sum + wi, total + w));
    if weight > 0.0 {
        Some(weighted / weight)
    } else {
        None
    }
}
