//! The in-memory grid of cell values and the `values` JSON codec.

use crate::error::{Result, SheetsError};
use serde_json::Value;

/// A block of string cell values, row-major.
///
/// Rows and columns keep API order exactly. The API trims trailing empty
/// cells per row, so a read can legitimately return rows of different
/// lengths; such a grid stays jagged rather than being padded into a
/// rectangle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Builds a grid from owned rows.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Builds a grid holding a single row.
    pub fn single_row<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: vec![cells.into_iter().map(Into::into).collect()],
        }
    }

    /// Appends a row.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the widest row.
    pub fn col_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// True when the grid holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when every row has the same length. An empty grid counts as
    /// rectangular.
    pub fn is_rectangular(&self) -> bool {
        match self.rows.first() {
            Some(first) => self.rows.iter().all(|row| row.len() == first.len()),
            None => true,
        }
    }

    /// The rows of the grid.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Cell at zero-based (row, col), if present.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
    }

    /// Parses the body of a `values.get` response.
    ///
    /// An absent or null `values` field denotes an empty range and yields
    /// a zero-row grid. Null cells become empty strings; numeric and
    /// boolean cells are rendered to their string forms.
    pub fn from_values_response(body: &Value) -> Result<Self> {
        let values = match body.get("values") {
            None | Some(Value::Null) => return Ok(Self::new()),
            Some(values) => values,
        };
        let rows = values
            .as_array()
            .ok_or_else(|| SheetsError::Parse("`values` is not an array".into()))?;

        let mut grid = Self::new();
        for (i, row) in rows.iter().enumerate() {
            let cells = row.as_array().ok_or_else(|| {
                SheetsError::Parse(format!("row {} of `values` is not an array", i))
            })?;
            grid.push_row(cells.iter().map(cell_to_string).collect::<Result<_>>()?);
        }
        Ok(grid)
    }

    /// Serializes the grid into the `{"values": [[..]]}` envelope used by
    /// `values.update` and `values.append`.
    pub fn to_values_body(&self) -> Value {
        serde_json::json!({ "values": self.rows })
    }
}

impl From<Vec<Vec<String>>> for Grid {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }
}

fn cell_to_string(cell: &Value) -> Result<String> {
    match cell {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Array(_) | Value::Object(_) => {
            Err(SheetsError::Parse("cell value is not a scalar".into()))
        }
    }
}
