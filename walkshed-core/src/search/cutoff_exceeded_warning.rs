use crate::model::VertexId;
use std::fmt::Display;
use std::time::Duration;

/// which circuit breaker interrupted a search
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BreakerReason {
    MaxSettled(usize),
    Timeout(Duration),
    Cancelled,
}

impl Display for BreakerReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BreakerReason::MaxSettled(n) => write!(f, "settled vertex limit of {n} reached"),
            BreakerReason::Timeout(d) => write!(f, "search deadline of {}ms reached", d.as_millis()),
            BreakerReason::Cancelled => write!(f, "search was cancelled"),
        }
    }
}

/// a search was aborted by its circuit breaker before the cost cutoff was
/// exhausted. this is not an error: the partial reachable set found so far
/// is kept alongside this warning.
#[derive(Debug, Clone, PartialEq)]
pub struct CutoffExceededWarning {
    pub source: VertexId,
    pub reason: BreakerReason,
    pub settled: usize,
    pub elapsed: Duration,
}

impl Display for CutoffExceededWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "search from vertex {} stopped early after settling {} vertices in {}ms: {}",
            self.source,
            self.settled,
            self.elapsed.as_millis(),
            self.reason
        )
    }
}
