use crate::Timers;
use crate::pal::PlatformFacade;

/// What the registry does when a timer is started with a name that is already registered.
///
/// Either way, the earlier timer keeps working for any caller still holding it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum NameCollision {
    /// The new timer takes the place of the earlier one ("last write wins").
    ///
    /// [`Timers::all()`] lists one timer per name, at the position where the name was
    /// first registered. The earlier timer is no longer reachable through the registry.
    #[default]
    Replace,

    /// Both timers remain listed by [`Timers::all()`], in the order they were started.
    ///
    /// [`Timers::get()`] returns the most recently started one.
    Retain,
}

/// Creates instances of [`Timers`].
///
/// Use `Timers::builder()` to create a new instance of this builder. All parameters are
/// optional; `Timers::new()` is equivalent to building with no parameters set.
///
/// # Examples
///
/// ```
/// use named_timers::{NameCollision, Timers};
///
/// let timers = Timers::builder()
///     .name_collision(NameCollision::Retain)
///     .log_stops(false)
///     .build();
///
/// timers.start_timer("retry").stop();
/// timers.start_timer("retry").stop();
///
/// assert_eq!(timers.len(), 2);
/// ```
#[derive(Debug)]
pub struct TimersBuilder {
    name_collision: NameCollision,
    log_stops: bool,
    platform: PlatformFacade,
}

impl TimersBuilder {
    pub(crate) fn new() -> Self {
        Self {
            name_collision: NameCollision::default(),
            log_stops: true,
            platform: PlatformFacade::real(),
        }
    }

    /// Sets the policy for starting a timer whose name is already registered.
    ///
    /// Defaults to [`NameCollision::Replace`].
    #[must_use]
    pub fn name_collision(self, name_collision: NameCollision) -> Self {
        Self {
            name_collision,
            ..self
        }
    }

    /// Sets whether stopping a timer emits a `debug` level event with its elapsed time.
    ///
    /// Defaults to `true`.
    #[must_use]
    pub fn log_stops(self, log_stops: bool) -> Self {
        Self { log_stops, ..self }
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn platform(self, platform: PlatformFacade) -> Self {
        Self { platform, ..self }
    }

    /// Creates the registry. It starts out empty.
    #[must_use]
    pub fn build(self) -> Timers {
        Timers::from_parts(self.name_collision, self.log_stops, self.platform)
    }
}
