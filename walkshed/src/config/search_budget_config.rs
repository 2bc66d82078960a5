use serde::{Deserialize, Serialize};
use std::time::Duration;
use walkshed_core::search::SearchBudget;

/// circuit breaker limits applied to each walkshed search
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBudgetConfig {
    #[serde(default)]
    pub max_settled: Option<usize>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl From<&SearchBudgetConfig> for SearchBudget {
    fn from(value: &SearchBudgetConfig) -> Self {
        SearchBudget {
            max_settled: value.max_settled,
            timeout: value.timeout_ms.map(Duration::from_millis),
        }
    }
}
