use super::BreakerReason;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// number of settled vertices between wall-clock checks
const CLOCK_CHECK_INTERVAL: usize = 64;

/// secondary limits on a single-source search beyond its cost cutoff. a large
/// cutoff over a dense network can make one search arbitrarily expensive, so
/// each search may also be capped by settled-vertex count and a deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchBudget {
    pub max_settled: Option<usize>,
    pub timeout: Option<Duration>,
}

impl SearchBudget {
    pub fn unlimited() -> SearchBudget {
        SearchBudget::default()
    }

    /// tests whether a search that has settled `settled` vertices since `started`
    /// must stop now. cancellation is checked on every call, the clock only
    /// periodically.
    pub fn check(
        &self,
        settled: usize,
        started: Instant,
        cancel: Option<&CancellationToken>,
    ) -> Option<BreakerReason> {
        if cancel.map(|c| c.is_cancelled()).unwrap_or_default() {
            return Some(BreakerReason::Cancelled);
        }
        if let Some(max) = self.max_settled {
            if settled >= max {
                return Some(BreakerReason::MaxSettled(max));
            }
        }
        if let Some(timeout) = self.timeout {
            if settled % CLOCK_CHECK_INTERVAL == 0 && started.elapsed() >= timeout {
                return Some(BreakerReason::Timeout(timeout));
            }
        }
        None
    }
}

/// cancels one in-flight search. each search gets its own token so that
/// cancelling it leaves every other running search untouched.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> CancellationToken {
        CancellationToken::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
