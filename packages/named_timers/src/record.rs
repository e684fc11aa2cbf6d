use serde::{Deserialize, Serialize};

/// Serializable snapshot of a [`Timer`][crate::Timer], for attaching to logs or responses.
///
/// All timestamps are fractional seconds. `start` and `end` are measured from the
/// Unix epoch; `end` is absent while the timer is running. `elapsed` is captured at
/// the moment the snapshot was taken.
///
/// Serializes as:
///
/// ```json
/// { "name": "db-query", "start": 1760000000.25, "end": null, "elapsed": 0.05 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimerRecord {
    name: String,
    start: f64,
    end: Option<f64>,
    elapsed: f64,
}

impl TimerRecord {
    #[must_use]
    pub(crate) fn new(name: String, start: f64, end: Option<f64>, elapsed: f64) -> Self {
        Self {
            name,
            start,
            end,
            elapsed,
        }
    }

    /// The name the timer was started with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seconds since the Unix epoch at which the timer was started.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Seconds since the Unix epoch at which the timer was stopped, if it was.
    #[must_use]
    pub fn end(&self) -> Option<f64> {
        self.end
    }

    /// Elapsed seconds at the time the record was taken.
    ///
    /// For a stopped timer this is exactly `end - start`. For a running timer it is the
    /// clock reading taken when the record was created minus `start`.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Whether the timer was still running when the record was taken.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.end.is_none()
    }
}
