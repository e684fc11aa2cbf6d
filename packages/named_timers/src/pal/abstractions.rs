//! Platform abstraction trait definitions.

use std::fmt::Debug;
use std::time::Duration;

/// Provides the current time to timers.
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Gets the current time as the duration elapsed since the Unix epoch.
    ///
    /// Successive readings never decrease.
    fn now(&self) -> Duration;
}
