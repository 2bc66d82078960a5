use serde::{Deserialize, Serialize};

/// NAD83 / New York Long Island (ftUS), EPSG:2263
pub const NY_LONG_ISLAND_FT: &str = "+proj=lcc +lat_0=40.1666666666667 +lon_0=-74 +lat_1=41.0333333333333 +lat_2=40.6666666666667 +x_0=300000 +y_0=0 +ellps=GRS80 +units=us-ft +no_defs +type=crs";

/// WGS 84 longitude/latitude, EPSG:4326
pub const WGS84: &str = "+proj=longlat +datum=WGS84 +no_defs +type=crs";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: String,
    /// projected CRS of every input, in feet
    #[serde(default = "default_source_proj4")]
    pub source_proj4: String,
    /// geographic CRS of the exported isochrones
    #[serde(default = "default_target_proj4")]
    pub target_proj4: String,
    #[serde(default)]
    pub overwrite: bool,
}

fn default_directory() -> String {
    String::from("output")
}

fn default_source_proj4() -> String {
    String::from(NY_LONG_ISLAND_FT)
}

fn default_target_proj4() -> String {
    String::from(WGS84)
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            directory: default_directory(),
            source_proj4: default_source_proj4(),
            target_proj4: default_target_proj4(),
            overwrite: false,
        }
    }
}
