//! Range value operations: read, write, append, clear, export.

use crate::client::SheetsClient;
use gsheets_core::csv as csv_codec;
use gsheets_core::{a1, Grid, Result};
use std::fs::File;
use std::path::Path;

impl SheetsClient {
    /// Reads a range, e.g. `Sheet1!A1:C10`.
    ///
    /// An absent `values` field denotes an empty range and yields a
    /// zero-row grid. Rows come back exactly as the API returns them; the
    /// API trims trailing empty cells, so the result may be jagged.
    pub fn read_range(&self, range: &str) -> Result<Grid> {
        let response = self.get(&self.values_url(range, ""))?.into_result()?;
        Grid::from_values_response(&response.json()?)
    }

    /// Reads a single cell by zero-based row and column on the first
    /// visible sheet: `(0, 0)` reads `A1`.
    pub fn read_cell(&self, row: u32, col: u32) -> Result<Grid> {
        self.read_range(&a1::cell_ref(row, col))
    }

    /// Overwrites a range with the grid, sending values verbatim
    /// (`valueInputOption=RAW`).
    ///
    /// The caller owns any read-modify-write race: the API offers no
    /// compare-and-swap at range level.
    pub fn write_range(&self, range: &str, grid: &Grid) -> Result<()> {
        let url = self.values_url(range, "?valueInputOption=RAW");
        self.put(&url, grid.to_values_body())?.into_result()?;
        Ok(())
    }

    /// Appends one row after the last row of the sheet's data table,
    /// through the dedicated `values.append` endpoint.
    pub fn append_row<I, S>(&self, sheet_name: &str, cells: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let grid = Grid::single_row(cells);
        let range = a1::quote_sheet_name(sheet_name);
        let url = self.values_url(&range, ":append?valueInputOption=RAW");
        self.post(&url, grid.to_values_body())?.into_result()?;
        Ok(())
    }

    /// Writes a formula into one cell. `USER_ENTERED` makes the API
    /// interpret the leading `=` instead of storing it as literal text.
    pub fn set_formula(&self, cell: &str, formula: &str) -> Result<()> {
        let grid = Grid::single_row([formula]);
        let url = self.values_url(cell, "?valueInputOption=USER_ENTERED");
        self.put(&url, grid.to_values_body())?.into_result()?;
        Ok(())
    }

    /// Clears the values of a range, leaving formatting in place.
    pub fn clear_range(&self, range: &str) -> Result<()> {
        let url = self.values_url(range, ":clear");
        self.post_empty(&url)?.into_result()?;
        Ok(())
    }

    /// Reads a range and writes it to `path` as CSV with standard
    /// quoting. The file is created (or truncated) and closed on every
    /// exit path.
    pub fn export_csv(&self, range: &str, path: impl AsRef<Path>) -> Result<()> {
        let grid = self.read_range(range)?;
        let file = File::create(path)?;
        csv_codec::write_grid(&grid, file)
    }
}
