use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("output file {0} exists and overwrite is disabled")]
    FileExists(String),
    #[error("failure writing {0}: {1}")]
    IoError(String, std::io::Error),
    #[error("failure writing CSV file {0}: {1}")]
    CsvError(String, csv::Error),
    #[error("failure encoding JSON for {0}: {1}")]
    JsonError(String, serde_json::Error),
    #[error("invalid projection '{0}': {1}")]
    InvalidProjection(String, String),
    #[error("failure reprojecting coordinate ({0}, {1}): {2}")]
    ReprojectionError(f64, f64, String),
}
