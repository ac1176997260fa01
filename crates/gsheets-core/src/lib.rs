//! Shared types for the gsheets client.
//!
//! This crate holds everything that does not touch the network: the error
//! taxonomy, the in-memory grid of cell values with its `values` codec,
//! A1-notation addressing, the typed `batchUpdate` descriptors, and CSV
//! encoding. The HTTP side lives in `gsheets-client`.

pub mod a1;
pub mod batch;
pub mod csv;
pub mod error;
pub mod grid;

pub use batch::{BatchRequest, Color, Dimension};
pub use error::{Result, SheetsError};
pub use grid::Grid;
