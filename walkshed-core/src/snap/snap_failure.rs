use thiserror::Error;

/// failure to map a single point onto the network. these are isolated to
/// the affected entity and never abort a batch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnapFailure {
    #[error("spatial index is empty, graph has no vertices to snap to")]
    EmptyIndex,
    #[error("cannot snap non-finite coordinate ({0}, {1})")]
    NonFiniteCoordinate(f64, f64),
    #[error("nearest vertex is {distance} ft away which exceeds the snap limit of {limit} ft")]
    BeyondLimit { distance: f64, limit: f64 },
}
