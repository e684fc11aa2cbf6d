//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::pal::abstractions::Platform;

/// Fake clock whose readings are controlled by the test.
///
/// Clones share the same underlying time, so a test can keep one clone and advance
/// the time observed by timers that were handed another.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    now: Arc<Mutex<Duration>>,
}

impl FakePlatform {
    /// Creates a fake clock that reads as the given time since the epoch.
    pub(crate) fn starting_at(now: Duration) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub(crate) fn set_now(&self, now: Duration) {
        *self
            .now
            .lock()
            .expect("FakePlatform state lock should not be poisoned") = now;
    }

    /// Moves the clock forward by `delta`.
    pub(crate) fn advance(&self, delta: Duration) {
        let mut now = self
            .now
            .lock()
            .expect("FakePlatform state lock should not be poisoned");
        *now = now.saturating_add(delta);
    }
}

impl Platform for FakePlatform {
    fn now(&self) -> Duration {
        *self
            .now
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn reads_initial_time() {
        let platform = FakePlatform::starting_at(Duration::from_secs(100));
        assert_eq!(platform.now(), Duration::from_secs(100));
    }

    #[test]
    fn advance_moves_forward() {
        let platform = FakePlatform::starting_at(Duration::from_secs(100));
        platform.advance(Duration::from_millis(250));

        assert_eq!(platform.now(), Duration::from_millis(100_250));
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::starting_at(Duration::ZERO);
        let platform2 = platform1.clone();

        platform1.set_now(Duration::from_secs(7));
        assert_eq!(platform2.now(), Duration::from_secs(7));
    }
}
