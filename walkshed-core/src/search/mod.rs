mod cutoff_exceeded_warning;
mod driving_distance;
mod frontier_entry;
mod reachable_set;
mod search_budget;

pub use cutoff_exceeded_warning::{BreakerReason, CutoffExceededWarning};
pub use driving_distance::{driving_distance, driving_distance_cancellable, driving_distance_single};
pub use reachable_set::ReachableSet;
pub use search_budget::{CancellationToken, SearchBudget};
