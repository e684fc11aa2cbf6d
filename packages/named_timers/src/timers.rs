//! Registry of every timer started through it.

use std::fmt;
use std::sync::Mutex;

use foldhash::{HashMap, HashMapExt};
use tracing::{debug, info, trace};

use crate::pal::PlatformFacade;
use crate::{ERR_POISONED_LOCK, Error, NameCollision, Timer, TimerRecord, TimersBuilder};

/// Starts timers and keeps track of all of them for later reporting.
///
/// A registry is an ordinary value: create one for whatever scope should be reported
/// on (a request, a job, the whole process) and share it by reference with the code
/// that needs to start timers. It can be shared across threads.
///
/// Timers are listed in the order they were started. What happens when a name is
/// reused is controlled by [`NameCollision`]; by default the newer timer replaces the
/// older one in the registry.
///
/// # Examples
///
/// ```
/// use named_timers::Timers;
///
/// let timers = Timers::new();
///
/// let total = timers.start_timer("request");
/// let query = timers.start_timer("db-query");
/// // Run the query...
/// query.stop();
/// // Render the response...
/// total.stop();
///
/// assert_eq!(timers.len(), 2);
/// assert!(timers.get("db-query").is_some());
/// assert!(timers.get("cache-lookup").is_none());
///
/// // Attach the breakdown to a response.
/// let json = timers.to_json().unwrap();
/// assert!(json.contains("\"name\":\"db-query\""));
/// ```
#[derive(Debug)]
pub struct Timers {
    entries: Mutex<Entries>,
    name_collision: NameCollision,
    log_stops: bool,
    platform: PlatformFacade,
}

#[derive(Debug)]
struct Entries {
    /// In the order the timers were registered.
    ordered: Vec<Timer>,

    /// Index into `ordered` of the timer `get()` returns for each name.
    by_name: HashMap<String, usize>,
}

impl Timers {
    /// Creates an empty registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a builder for a registry with a custom configuration.
    #[must_use]
    pub fn builder() -> TimersBuilder {
        TimersBuilder::new()
    }

    pub(crate) fn from_parts(
        name_collision: NameCollision,
        log_stops: bool,
        platform: PlatformFacade,
    ) -> Self {
        Self {
            entries: Mutex::new(Entries {
                ordered: Vec::new(),
                by_name: HashMap::new(),
            }),
            name_collision,
            log_stops,
            platform,
        }
    }

    /// Starts a timer with the given name and registers it.
    ///
    /// The timer is registered before it is returned, so every timer that exists can be
    /// found through the registry that started it (unless replaced, see [`NameCollision`]).
    ///
    /// The start time is read while the registry is locked, so the order of [`all()`][Self::all]
    /// matches the order of start times even when timers are started from several threads.
    pub fn start_timer(&self, name: impl Into<String>) -> Timer {
        let name = name.into();

        let mut entries = self.entries.lock().expect(ERR_POISONED_LOCK);
        let timer = Timer::start(name, self.platform.clone(), self.log_stops);
        self.register(&mut entries, timer.clone());

        timer
    }

    fn register(&self, entries: &mut Entries, timer: Timer) {
        let Entries { ordered, by_name } = entries;

        let next_index = ordered.len();

        match (by_name.get(timer.name()).copied(), self.name_collision) {
            (Some(index), NameCollision::Replace) => {
                debug!(
                    timer = timer.name(),
                    "replacing registered timer with the same name"
                );

                // The index always comes from a push into `ordered`, which is never shrunk.
                if let Some(slot) = ordered.get_mut(index) {
                    *slot = timer;
                }
            }
            (existing, _) => {
                if existing.is_some() {
                    debug!(
                        timer = timer.name(),
                        "registering timer alongside one with the same name"
                    );
                }

                by_name.insert(timer.name().to_owned(), next_index);
                ordered.push(timer);
            }
        }
    }

    /// Looks up the registered timer with the given name.
    ///
    /// Returns `None` if no timer with this name was ever started through this registry.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Timer> {
        let entries = self.entries.lock().expect(ERR_POISONED_LOCK);

        let timer = entries
            .by_name
            .get(name)
            .and_then(|index| entries.ordered.get(*index))
            .cloned();

        if timer.is_none() {
            trace!(timer = name, "no timer registered with this name");
        }

        timer
    }

    /// All registered timers, in the order they were registered.
    #[must_use]
    pub fn all(&self) -> Vec<Timer> {
        self.entries.lock().expect(ERR_POISONED_LOCK).ordered.clone()
    }

    /// Snapshots of all registered timers, in the order they were registered.
    #[must_use]
    pub fn to_records(&self) -> Vec<TimerRecord> {
        self.all().iter().map(Timer::to_record).collect()
    }

    /// Encodes [`to_records()`][Self::to_records] as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if the records cannot be encoded. This only happens
    /// if a timestamp is not representable in JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_records()).map_err(Error::Encode)
    }

    /// Emits one `info` level event per registered timer, in registration order.
    #[cfg_attr(test, mutants::skip)] // Output goes to whatever subscriber is installed.
    pub fn log_report(&self) {
        for record in self.to_records() {
            info!(
                timer = record.name(),
                elapsed_secs = record.elapsed(),
                running = record.is_running(),
                "timer report"
            );
        }
    }

    /// Number of timers listed by [`all()`][Self::all].
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().expect(ERR_POISONED_LOCK).ordered.len()
    }

    /// Whether no timers have been started through this registry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The policy applied when a timer is started with an already registered name.
    #[must_use]
    pub fn name_collision(&self) -> NameCollision {
        self.name_collision
    }
}

impl Default for Timers {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Timers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for timer in self.all() {
            writeln!(f, "{timer}")?;
        }

        Ok(())
    }
}
