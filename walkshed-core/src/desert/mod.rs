mod desert_flag;
mod desert_summary;
mod distance_table;
mod tract_distance;
mod tract_reference;

pub use desert_flag::{classify, DesertFlag};
pub use desert_summary::DesertSummary;
pub use distance_table::{classify_tract, nearest_distance, DistanceTable};
pub use tract_distance::TractDistance;
pub use tract_reference::TractReference;
