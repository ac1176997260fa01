//! Blocking client for the Google Sheets v4 REST API.
//!
//! The caller supplies a valid OAuth bearer token; token acquisition and
//! refresh happen outside this crate. Every operation performs exactly one
//! HTTP round trip and surfaces the first failure without retrying, so
//! callers can layer their own backoff policy on top.
//!
//! # Example
//!
//! ```no_run
//! use gsheets_client::SheetsClient;
//!
//! fn main() -> gsheets_client::Result<()> {
//!     let client = SheetsClient::new("ya29.token", "1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms")?;
//!     let grid = client.read_range("Sheet1!A1:C10")?;
//!     for row in grid.rows() {
//!         println!("{}", row.join("\t"));
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod response;
pub mod spreadsheet;
pub mod values;

pub use client::SheetsClient;
pub use config::ClientConfig;
pub use response::ApiResponse;
pub use spreadsheet::SheetProperties;

// Re-export the shared types callers need at the call site.
pub use gsheets_core::{BatchRequest, Color, Dimension, Grid, Result, SheetsError};
