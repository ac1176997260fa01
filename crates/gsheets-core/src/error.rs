//! Error types for the gsheets crates.

use thiserror::Error;

/// Result type alias for sheets operations.
pub type Result<T> = std::result::Result<T, SheetsError>;

/// Unified error type for all sheets operations.
///
/// Nothing is recovered internally: every operation surfaces the first
/// failure to its caller. Transport failures are kept distinct from
/// API-level failures so callers can layer their own retry policy on top.
#[derive(Error, Debug)]
pub enum SheetsError {
    /// Connection-level failure (DNS, TCP, TLS) or timeout.
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx HTTP response from the API.
    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// Malformed JSON or a response document with an unexpected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Caller-supplied input that cannot be sent to the API.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Filesystem failure during CSV export.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SheetsError {
    /// Returns true if the operation may succeed on retry.
    ///
    /// Transport failures and HTTP 429/5xx responses are transient. The
    /// library never retries on its own; the caller decides the policy.
    pub fn is_retryable(&self) -> bool {
        match self {
            SheetsError::Transport(_) => true,
            SheetsError::Api { status, .. } => *status == 429 || (500..600).contains(status),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for SheetsError {
    fn from(err: serde_json::Error) -> Self {
        SheetsError::Parse(err.to_string())
    }
}

impl From<csv::Error> for SheetsError {
    fn from(err: csv::Error) -> Self {
        match err.into_kind() {
            csv::ErrorKind::Io(io) => SheetsError::Io(io),
            other => SheetsError::Parse(format!("CSV encoding error: {:?}", other)),
        }
    }
}
