use thiserror::Error;

/// Errors that can occur when exporting timers.
///
/// Starting, stopping and querying timers cannot fail.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The timer records could not be encoded as JSON.
    #[error("failed to encode timer records as JSON")]
    Encode(#[from] serde_json::Error),
}
