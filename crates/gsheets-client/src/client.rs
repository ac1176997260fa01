//! The authenticated Sheets API client.

use crate::config::ClientConfig;
use crate::response::ApiResponse;
use gsheets_core::{Result, SheetsError};
use serde_json::Value;
use std::time::Instant;
use tracing::debug;

/// Blocking client bound to one spreadsheet.
///
/// Holds the bearer token and the target spreadsheet id; both are opaque
/// strings, immutable after construction, so a client can be shared by
/// reference across threads. Every operation performs exactly one HTTP
/// round trip within the configured timeout.
pub struct SheetsClient {
    http: reqwest::blocking::Client,
    config: ClientConfig,
    token: String,
    spreadsheet_id: String,
}

impl SheetsClient {
    /// Creates a client with default configuration.
    pub fn new(token: impl Into<String>, spreadsheet_id: impl Into<String>) -> Result<Self> {
        Self::with_config(token, spreadsheet_id, ClientConfig::default())
    }

    /// Creates a client with explicit configuration.
    pub fn with_config(
        token: impl Into<String>,
        spreadsheet_id: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let token = token.into();
        let spreadsheet_id = spreadsheet_id.into();
        if token.is_empty() {
            return Err(SheetsError::InvalidArgument("access token is empty".into()));
        }
        if spreadsheet_id.is_empty() {
            return Err(SheetsError::InvalidArgument(
                "spreadsheet id is empty".into(),
            ));
        }

        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| SheetsError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            config,
            token,
            spreadsheet_id,
        })
    }

    /// The target spreadsheet id.
    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    /// Value of the `Authorization` header sent with every request.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    // URL construction

    /// The API root, used by spreadsheet creation.
    pub(crate) fn root_url(&self) -> String {
        self.config.base_url.trim_end_matches('/').to_string()
    }

    /// `{root}/{spreadsheetId}{suffix}`.
    pub(crate) fn spreadsheet_url(&self, suffix: &str) -> String {
        format!("{}/{}{}", self.root_url(), self.spreadsheet_id, suffix)
    }

    /// `{root}/{spreadsheetId}/values/{range}{suffix}`. The range spec is
    /// percent-encoded; sheet names may contain spaces and quotes.
    pub(crate) fn values_url(&self, range: &str, suffix: &str) -> String {
        self.spreadsheet_url(&format!("/values/{}{}", urlencoding::encode(range), suffix))
    }

    // Dispatch

    pub(crate) fn get(&self, url: &str) -> Result<ApiResponse> {
        self.execute(reqwest::Method::GET, url, None)
    }

    pub(crate) fn post(&self, url: &str, body: Value) -> Result<ApiResponse> {
        self.execute(reqwest::Method::POST, url, Some(body))
    }

    pub(crate) fn post_empty(&self, url: &str) -> Result<ApiResponse> {
        self.execute(reqwest::Method::POST, url, None)
    }

    pub(crate) fn put(&self, url: &str, body: Value) -> Result<ApiResponse> {
        self.execute(reqwest::Method::PUT, url, Some(body))
    }

    fn execute(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<Value>,
    ) -> Result<ApiResponse> {
        let start = Instant::now();
        let mut request = self
            .http
            .request(method.clone(), url)
            .bearer_auth(&self.token);
        if let Some(body) = &body {
            // Also sets Content-Type: application/json
            request = request.json(body);
        }

        let response = request.send().map_err(transport_error)?;
        let status = response.status().as_u16();
        let bytes = response.bytes().map_err(transport_error)?.to_vec();
        let latency_ms = start.elapsed().as_millis() as u64;

        debug!(%method, url, status, latency_ms, "sheets API round trip");

        Ok(ApiResponse {
            status,
            body: bytes,
            latency_ms,
        })
    }
}

impl std::fmt::Debug for SheetsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The token stays out of Debug output
        f.debug_struct("SheetsClient")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

/// Maps a reqwest failure to the transport variant, keeping timeouts
/// identifiable in the message.
fn transport_error(err: reqwest::Error) -> SheetsError {
    if err.is_timeout() {
        SheetsError::Transport(format!("timeout: {}", err))
    } else if err.is_connect() {
        SheetsError::Transport(format!("connection failed: {}", err))
    } else {
        SheetsError::Transport(err.to_string())
    }
}
