mod distance_config;
mod entrance_config;
mod network_source;
mod output_config;
mod search_budget_config;
mod tract_config;
mod walkshed_config;

pub use distance_config::{DistanceConfig, DistanceUnit};
pub use entrance_config::{AttributeFilter, EntranceConfig};
pub use network_source::NetworkSource;
pub use output_config::{OutputConfig, NY_LONG_ISLAND_FT, WGS84};
pub use search_budget_config::SearchBudgetConfig;
pub use tract_config::TractConfig;
pub use walkshed_config::WalkshedConfig;
