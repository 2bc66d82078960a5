use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the part of a tract that straight-line entrance distances are measured from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TractReference {
    /// the tract polygon itself. an entrance inside the tract is at distance 0.
    #[default]
    Boundary,
    /// the centroid of the tract polygon
    Centroid,
}

impl Display for TractReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TractReference::Boundary => write!(f, "boundary"),
            TractReference::Centroid => write!(f, "centroid"),
        }
    }
}
