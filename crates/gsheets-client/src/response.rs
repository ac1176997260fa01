//! API response wrapper.

use gsheets_core::{Result, SheetsError};
use serde_json::Value;

/// One HTTP response from the API: status, raw body, measured latency.
///
/// Bodies stay raw bytes until a caller asks for JSON, so error bodies
/// can be reported verbatim without a parse attempt.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,

    /// Response body.
    pub body: Vec<u8>,

    /// Round-trip latency in milliseconds.
    pub latency_ms: u64,
}

impl ApiResponse {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text. Lossy: error bodies are only ever reported, never
    /// parsed.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Body parsed as JSON.
    pub fn json(&self) -> Result<Value> {
        serde_json::from_slice(&self.body)
            .map_err(|e| SheetsError::Parse(format!("invalid JSON body: {}", e)))
    }

    /// Passes 2xx responses through and converts anything else into
    /// [`SheetsError::Api`] carrying the status and body.
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(SheetsError::Api {
                status: self.status,
                body: self.text(),
            })
        }
    }
}
