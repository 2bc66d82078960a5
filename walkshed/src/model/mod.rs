mod walkshed_error;

pub use walkshed_error::WalkshedError;
