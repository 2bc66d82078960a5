use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("unable to load file {0}: {1}")]
    FileError(String, std::io::Error),
    #[error("failure reading CSV file {0}: {1}")]
    CsvError(String, csv::Error),
    #[error("failed to read file {0} as GeoJSON: {1}")]
    GeoJsonError(String, geojson::Error),
    #[error("GeoJSON file {0} must be a FeatureCollection but found {1}")]
    NotAFeatureCollection(String, String),
    #[error("file {0} has no usable features")]
    NoFeatures(String),
}
