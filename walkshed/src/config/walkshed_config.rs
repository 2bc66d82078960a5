use super::{
    DistanceConfig, EntranceConfig, NetworkSource, OutputConfig, SearchBudgetConfig, TractConfig,
};
use crate::model::WalkshedError;
use serde::{Deserialize, Serialize};
use walkshed_core::isochrone::IsochroneBuilder;

/// defines the inputs and parameters of a walkshed run
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct WalkshedConfig {
    #[serde(default)]
    pub network: NetworkSource,
    #[serde(default)]
    pub entrances: EntranceConfig,
    #[serde(default)]
    pub tracts: TractConfig,
    #[serde(default = "default_walk_cutoff")]
    pub walk_cutoff: DistanceConfig,
    #[serde(default = "default_desert_thresholds")]
    pub desert_thresholds: Vec<DistanceConfig>,
    #[serde(default = "default_concavity")]
    pub concavity: f64,
    #[serde(default)]
    pub allow_holes: bool,
    /// entrances farther than this from every network vertex are not snapped
    #[serde(default)]
    pub max_snap_distance: Option<DistanceConfig>,
    #[serde(default)]
    pub search_budget: SearchBudgetConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// a half mile
fn default_walk_cutoff() -> DistanceConfig {
    DistanceConfig::feet(2640.0)
}

/// the 0.5 mile desert standard rounded to 800 m
fn default_desert_thresholds() -> Vec<DistanceConfig> {
    vec![DistanceConfig::feet(2625.0)]
}

fn default_concavity() -> f64 {
    0.8
}

impl Default for WalkshedConfig {
    fn default() -> Self {
        Self {
            network: NetworkSource::default(),
            entrances: EntranceConfig::default(),
            tracts: TractConfig::default(),
            walk_cutoff: default_walk_cutoff(),
            desert_thresholds: default_desert_thresholds(),
            concavity: default_concavity(),
            allow_holes: false,
            max_snap_distance: None,
            search_budget: SearchBudgetConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl WalkshedConfig {
    pub fn walk_cutoff_ft(&self) -> f64 {
        self.walk_cutoff.to_feet()
    }

    /// desert thresholds in feet, ascending and without duplicates
    pub fn desert_thresholds_ft(&self) -> Vec<f64> {
        let mut thresholds = self
            .desert_thresholds
            .iter()
            .map(|t| t.to_feet())
            .collect::<Vec<_>>();
        thresholds.sort_by(f64::total_cmp);
        thresholds.dedup();
        thresholds
    }

    pub fn max_snap_distance_ft(&self) -> Option<f64> {
        self.max_snap_distance.map(|d| d.to_feet())
    }

    pub fn isochrone_builder(&self) -> IsochroneBuilder {
        IsochroneBuilder::new(self.concavity, self.allow_holes)
    }

    /// rejects parameter values that would make a run meaningless
    pub fn validate(&self) -> Result<(), WalkshedError> {
        let cutoff = self.walk_cutoff_ft();
        if !cutoff.is_finite() || cutoff < 0.0 {
            return Err(WalkshedError::ConfigurationError(format!(
                "walk_cutoff must be a non-negative distance, found {}",
                self.walk_cutoff
            )));
        }
        if !(0.0..=1.0).contains(&self.concavity) {
            return Err(WalkshedError::ConfigurationError(format!(
                "concavity must be in [0, 1], found {}",
                self.concavity
            )));
        }
        if self.desert_thresholds.is_empty() {
            return Err(WalkshedError::ConfigurationError(String::from(
                "at least one desert threshold is required",
            )));
        }
        if let Some(bad) = self
            .desert_thresholds
            .iter()
            .find(|t| !t.to_feet().is_finite() || t.to_feet() < 0.0)
        {
            return Err(WalkshedError::ConfigurationError(format!(
                "desert thresholds must be non-negative distances, found {bad}"
            )));
        }
        if let NetworkSource::GeoJson { snap_tolerance, .. } = &self.network {
            if !snap_tolerance.is_finite() || *snap_tolerance < 0.0 {
                return Err(WalkshedError::ConfigurationError(format!(
                    "network snap_tolerance must be non-negative, found {snap_tolerance}"
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<&String> for WalkshedConfig {
    type Error = WalkshedError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let conf: WalkshedConfig = if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                WalkshedError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                WalkshedError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                WalkshedError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                WalkshedError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else {
            return Err(WalkshedError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        conf.validate()?;
        Ok(conf)
    }
}
