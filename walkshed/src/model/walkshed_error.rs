use crate::{export::ExportError, io::InputError};
use thiserror::Error;
use walkshed_core::graph::GraphIntegrityError;

#[derive(Error, Debug)]
pub enum WalkshedError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading inputs: {source}")]
    InputError {
        #[from]
        source: InputError,
    },
    #[error("network failed integrity check: {source}")]
    GraphIntegrityError {
        #[from]
        source: GraphIntegrityError,
    },
    #[error("failure writing outputs: {source}")]
    ExportError {
        #[from]
        source: ExportError,
    },
}
