use serde::{Deserialize, Serialize};
use walkshed_core::desert::TractReference;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TractConfig {
    /// GeoJSON FeatureCollection of tract polygons or multipolygons
    pub file: String,
    #[serde(default = "default_id_property")]
    pub id_property: String,
    #[serde(default = "default_population_property")]
    pub population_property: String,
    #[serde(default = "default_median_income_property")]
    pub median_income_property: String,
    #[serde(default)]
    pub reference: TractReference,
}

fn default_id_property() -> String {
    String::from("GEOID")
}

fn default_population_property() -> String {
    String::from("population")
}

fn default_median_income_property() -> String {
    String::from("median_income")
}

impl Default for TractConfig {
    fn default() -> Self {
        TractConfig {
            file: String::from("tracts.geojson"),
            id_property: default_id_property(),
            population_property: default_population_property(),
            median_income_property: default_median_income_property(),
            reference: TractReference::default(),
        }
    }
}
