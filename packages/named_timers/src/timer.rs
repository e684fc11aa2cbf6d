//! Measurement of a single named interval.

use std::fmt;
use std::sync::{Arc, OnceLock};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::TimerRecord;
use crate::pal::{Platform, PlatformFacade};

/// Measures the time elapsed since it was started, until it is stopped.
///
/// Timers are created by [`Timers::start_timer()`][crate::Timers::start_timer], which also
/// registers them so they can be enumerated later. The value returned to the caller is a
/// handle: cloning it does not create a new timer, and the registry holds a handle to the
/// same instance.
///
/// A timer runs until [`stop()`][Self::stop] is called. Stopping is permanent; a stopped
/// timer cannot be restarted and further calls to `stop()` have no effect.
///
/// # Examples
///
/// ```
/// use named_timers::Timers;
///
/// let timers = Timers::new();
/// let timer = timers.start_timer("db-query");
/// // Run the query...
/// timer.stop();
///
/// assert!(!timer.is_running());
/// println!("query took {:?}", timer.elapsed());
/// ```
#[derive(Clone, Debug)]
pub struct Timer {
    inner: Arc<TimerState>,
}

#[derive(Debug)]
struct TimerState {
    name: String,

    /// Time since the Unix epoch when the timer was started.
    start: Duration,

    /// Time since the Unix epoch when the timer was stopped. Set at most once.
    end: OnceLock<Duration>,

    platform: PlatformFacade,
    log_stop: bool,
}

impl Timer {
    /// Starts a new timer. Only the registry may call this, as it must also register it.
    #[must_use]
    pub(crate) fn start(name: String, platform: PlatformFacade, log_stop: bool) -> Self {
        let start = platform.now();

        debug!(timer = %name, "timer started");

        Self {
            inner: Arc::new(TimerState {
                name,
                start,
                end: OnceLock::new(),
                platform,
                log_stop,
            }),
        }
    }

    /// The name the timer was started with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Whether the timer has not been stopped yet.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.end.get().is_none()
    }

    /// Stops the timer, fixing its elapsed time.
    ///
    /// Has no effect if the timer is already stopped: the first stop determines the end
    /// of the interval, also when multiple threads race to stop the same timer.
    pub fn stop(&self) {
        if !self.is_running() {
            return;
        }

        let end = self.inner.platform.now();

        if self.inner.end.set(end).is_ok() && self.inner.log_stop {
            debug!(
                timer = %self.inner.name,
                elapsed = ?end.saturating_sub(self.inner.start),
                "timer stopped"
            );
        }
    }

    /// Time elapsed between start and stop.
    ///
    /// For a running timer this is the time elapsed so far, which grows with every call.
    /// For a stopped timer this is the fixed length of the measured interval.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.end_or_now().saturating_sub(self.inner.start)
    }

    /// Wall-clock time at which the timer was started.
    #[must_use]
    pub fn start_time(&self) -> SystemTime {
        UNIX_EPOCH + self.inner.start
    }

    /// Wall-clock time at which the timer was stopped, or `None` if it is still running.
    #[must_use]
    pub fn end_time(&self) -> Option<SystemTime> {
        self.inner.end.get().map(|end| UNIX_EPOCH + *end)
    }

    /// Takes a snapshot of the timer in its reporting shape.
    ///
    /// Safe to call on a running timer, in which case the snapshot has no end time and
    /// the elapsed time so far.
    ///
    /// The record's `elapsed` is the difference of its own `end` (or the current time, if
    /// running) and `start` in seconds, so for a stopped timer `elapsed == end - start` holds
    /// exactly on the reported values.
    #[must_use]
    pub fn to_record(&self) -> TimerRecord {
        let start = self.inner.start.as_secs_f64();
        let end = self.inner.end.get().map(Duration::as_secs_f64);
        let elapsed = end.unwrap_or_else(|| self.inner.platform.now().as_secs_f64()) - start;

        // A clock reading earlier than the start yields zero, as with `elapsed()`.
        TimerRecord::new(self.inner.name.clone(), start, end, elapsed.max(0.0))
    }

    /// Whether two handles refer to the same timer instance.
    ///
    /// Two timers started with the same name are different instances.
    #[must_use]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }

    fn end_or_now(&self) -> Duration {
        self.inner
            .end
            .get()
            .map_or_else(|| self.inner.platform.now(), |end| *end)
    }
}

impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.name(), self.elapsed())?;

        if self.is_running() {
            write!(f, " (running)")?;
        }

        Ok(())
    }
}
