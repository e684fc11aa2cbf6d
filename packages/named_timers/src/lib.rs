#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Named elapsed-time measurement for instrumenting code paths.
//!
//! Start a named [`Timer`] through a [`Timers`] registry, optionally stop it, and later
//! query its elapsed time or export every timer the registry has started, for example
//! to attach a timing breakdown to a log entry or a response.
//!
//! * [`Timers`] - starts timers and remembers all of them, in the order they were started.
//! * [`Timer`] - a handle to one measured interval.
//! * [`TimerRecord`] - the serializable snapshot of a timer used for reporting.
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//!
//! use named_timers::Timers;
//!
//! let timers = Timers::new();
//!
//! let timer = timers.start_timer("db-query");
//! std::thread::sleep(Duration::from_millis(10));
//! timer.stop();
//!
//! assert!(timer.elapsed() >= Duration::from_millis(10));
//!
//! for record in timers.to_records() {
//!     println!("{} took {:.3}s", record.name(), record.elapsed());
//! }
//! ```
//!
//! # Checkpoints
//!
//! The elapsed time of a running timer can be queried at any point without stopping it,
//! which is useful for progress reporting during long operations:
//!
//! ```
//! use named_timers::Timers;
//!
//! let timers = Timers::new();
//! let import = timers.start_timer("import");
//!
//! for batch in 0..3 {
//!     // Import the batch...
//!     println!("batch {batch} done after {:?}", import.elapsed());
//! }
//!
//! import.stop();
//! ```
//!
//! # Time source
//!
//! Start and end times are wall-clock timestamps, while elapsed times are measured with
//! the monotonic clock, so they are unaffected by wall clock adjustments.
//!
//! # Logging
//!
//! Starting and stopping timers emits `debug` level [`tracing`] events.
//! [`Timers::log_report()`] emits one `info` level event per registered timer.
//!
//! # Threading
//!
//! [`Timers`] and [`Timer`] are thread-safe. A registry can be shared between threads and
//! timers can be started, stopped and queried from any thread.

mod error;
mod pal;
mod record;
mod timer;
mod timers;
mod timers_builder;

pub use error::Error;
pub use record::TimerRecord;
pub use timer::Timer;
pub use timers::Timers;
pub use timers_builder::{NameCollision, TimersBuilder};

// A poisoned lock means another thread panicked while registering a timer; the registry
// contents can no longer be trusted.
pub(crate) const ERR_POISONED_LOCK: &str = "encountered poisoned lock - timer registry state \
    may be inconsistent";
