//! Real platform implementation backed by the operating system clocks.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crate::pal::abstractions::Platform;

/// Reads wall-clock time once, then advances it using the monotonic clock.
///
/// Readings are aligned with the wall clock at the moment of construction but are
/// immune to wall clock adjustments made afterwards, so elapsed times derived from
/// them never go backwards.
#[derive(Debug, Clone)]
pub(crate) struct RealPlatform {
    wall_anchor: Duration,
    monotonic_anchor: Instant,
}

impl RealPlatform {
    pub(crate) fn new() -> Self {
        let monotonic_anchor = Instant::now();

        // A system clock set before the epoch is pinned to the epoch.
        let wall_anchor = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();

        Self {
            wall_anchor,
            monotonic_anchor,
        }
    }
}

impl Platform for RealPlatform {
    fn now(&self) -> Duration {
        self.wall_anchor
            .saturating_add(self.monotonic_anchor.elapsed())
    }
}

#[cfg(test)]
#[cfg(not(miri))] // Miri cannot talk to the real platform.
mod tests {
    use super::*;

    #[test]
    fn now_is_approximately_wall_clock() {
        let platform = RealPlatform::new();

        let wall = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("test machine clock is after the epoch");
        let now = platform.now();

        assert!(now.abs_diff(wall) < Duration::from_secs(1));
    }

    #[test]
    fn readings_never_decrease() {
        let platform = RealPlatform::new();

        let mut previous = platform.now();
        for _ in 0..1000 {
            let current = platform.now();
            assert!(current >= previous);
            previous = current;
        }
    }
}
