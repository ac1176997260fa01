//! A1-notation addressing helpers.
//!
//! All helpers take zero-based row and column indices, matching the
//! indices used by `deleteDimension` and sort specs.

/// Column letters for a zero-based column index: 0 is `A`, 25 is `Z`,
/// 26 is `AA`.
pub fn column_letters(col: u32) -> String {
    let mut col = col;
    let mut out = String::new();
    loop {
        out.insert(0, (b'A' + (col % 26) as u8) as char);
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    out
}

/// A1 reference for a zero-based (row, col) pair: (0, 0) is `A1`,
/// (2, 1) is `B3`.
pub fn cell_ref(row: u32, col: u32) -> String {
    format!("{}{}", column_letters(col), row + 1)
}

/// Sheet-qualified A1 reference, e.g. `Sheet1!B3`.
pub fn sheet_cell_ref(sheet: &str, row: u32, col: u32) -> String {
    format!("{}!{}", quote_sheet_name(sheet), cell_ref(row, col))
}

/// Quotes a sheet name for use in a range spec. Names that are not plain
/// identifiers are single-quoted, with embedded quotes doubled.
pub fn quote_sheet_name(sheet: &str) -> String {
    let plain = !sheet.is_empty()
        && sheet
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        sheet.to_string()
    } else {
        format!("'{}'", sheet.replace('\'', "''"))
    }
}
