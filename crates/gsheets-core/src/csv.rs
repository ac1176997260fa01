//! CSV encoding of a grid.

use crate::error::Result;
use crate::grid::Grid;
use std::io::Write;

/// Writes the grid as CSV to `writer`.
///
/// Cells containing separators, quotes, or line breaks are quoted, with
/// embedded quotes doubled. Jagged grids are written as-is, one record
/// per row.
pub fn write_grid<W: Write>(grid: &Grid, writer: W) -> Result<()> {
    let mut out = ::csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);
    for row in grid.rows() {
        out.write_record(row)?;
    }
    out.flush()?;
    Ok(())
}

/// Renders the grid to a CSV string.
pub fn to_string(grid: &Grid) -> Result<String> {
    let mut buffer = Vec::new();
    write_grid(grid, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| crate::error::SheetsError::Parse(format!("CSV output is not UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Grid {
        Grid::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_plain_cells_are_unquoted() {
        let out = to_string(&grid(&[&["a", "b"], &["c", "d"]])).unwrap();
        assert_eq!(out, "a,b\nc,d\n");
    }

    #[test]
    fn test_separators_and_quotes_are_escaped() {
        let out = to_string(&grid(&[&["a", "b"], &["c,d", "e\"f"]])).unwrap();
        assert_eq!(out, "a,b\n\"c,d\",\"e\"\"f\"\n");
    }

    #[test]
    fn test_newlines_are_quoted() {
        let out = to_string(&grid(&[&["line1\nline2", "x"]])).unwrap();
        assert_eq!(out, "\"line1\nline2\",x\n");
    }

    #[test]
    fn test_jagged_grid_is_written_as_is() {
        let out = to_string(&grid(&[&["a", "b", "c"], &["d"]])).unwrap();
        assert_eq!(out, "a,b,c\nd\n");
    }

    #[test]
    fn test_empty_grid_writes_nothing() {
        let out = to_string(&Grid::new()).unwrap();
        assert_eq!(out, "");
    }
}
