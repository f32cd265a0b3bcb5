use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
    time::{Duration, Instant},
};

/// Process-scoped rate limiter for payment status checks.
///
/// One entry per client reference holding the time of the last provider
/// lookup. The map lives only in this process: it is initialized at startup,
/// never persisted, and does not coordinate across server instances. That is
/// acceptable because a given reference is polled by a single browser session.
#[derive(Clone, Default)]
pub struct StatusCheckLimiter {
    last_checked: Arc<Mutex<HashMap<String, Instant>>>,
}

impl StatusCheckLimiter {
    /// Minimum interval between provider status lookups for one reference.
    pub const MIN_INTERVAL: Duration = Duration::from_secs(30);

    /// Records a status check for `client_reference` if enough time has
    /// passed since the previous one. Returns false when the reference was
    /// checked under [`Self::MIN_INTERVAL`] ago.
    pub fn try_acquire(&self, client_reference: &str) -> bool {
        let mut last_checked = self
            .last_checked
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let now = Instant::now();

        if let Some(last) = last_checked.get(client_reference) {
            if now.duration_since(*last) < Self::MIN_INTERVAL {
                return false;
            }
        }

        last_checked.insert(client_reference.to_string(), now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::StatusCheckLimiter;

    /// Expect first acquisition for a reference to succeed
    #[test]
    fn test_first_acquire_succeeds() {
        let limiter = StatusCheckLimiter::default();

        assert!(limiter.try_acquire("PEKI-1000"));
    }

    /// Expect immediate second acquisition for the same reference to be throttled
    #[test]
    fn test_second_acquire_within_interval_throttled() {
        let limiter = StatusCheckLimiter::default();

        assert!(limiter.try_acquire("PEKI-1000"));
        assert!(!limiter.try_acquire("PEKI-1000"));
    }

    /// Expect different references to be limited independently
    #[test]
    fn test_references_limited_independently() {
        let limiter = StatusCheckLimiter::default();

        assert!(limiter.try_acquire("PEKI-1000"));
        assert!(limiter.try_acquire("PEKI-1001"));
    }
}
