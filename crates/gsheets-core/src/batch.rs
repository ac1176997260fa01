//! Typed request descriptors for the spreadsheet `batchUpdate` endpoint.
//!
//! Each [`BatchRequest`] variant maps to one descriptor object in the
//! `{"requests": [...]}` body. The endpoint applies a batch
//! transactionally: all descriptors succeed or none do.

use serde_json::{json, Value};

/// Row/column selector for dimension operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Rows,
    Columns,
}

impl Dimension {
    /// The wire name of the dimension.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rows => "ROWS",
            Self::Columns => "COLUMNS",
        }
    }
}

/// RGB cell background color with channels in `0.0..=1.0`, as the API
/// encodes colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Color {
    /// Builds a color from 8-bit channels.
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: f32::from(red) / 255.0,
            green: f32::from(green) / 255.0,
            blue: f32::from(blue) / 255.0,
        }
    }

    fn to_value(self) -> Value {
        json!({ "red": self.red, "green": self.green, "blue": self.blue })
    }
}

/// One structural edit in a `batchUpdate` call.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchRequest {
    /// Add a new sheet with the given title.
    AddSheet { title: String },
    /// Delete a sheet by id.
    DeleteSheet { sheet_id: i64 },
    /// Change the title of a sheet.
    RenameSheet { sheet_id: i64, title: String },
    /// Delete a run of rows or columns, `start_index` inclusive and
    /// `end_index` exclusive, zero-based.
    DeleteDimension {
        sheet_id: i64,
        dimension: Dimension,
        start_index: i64,
        end_index: i64,
    },
    /// Set the background color of a single cell, zero-based row/column.
    FormatCell {
        sheet_id: i64,
        row: i64,
        col: i64,
        background: Color,
    },
    /// Sort a range ascending by one zero-based column.
    SortRange { range: String, column_index: u32 },
    /// Merge every cell of a range into one.
    MergeCells { range: String },
    /// Find occurrences of a string, optionally replacing them.
    FindReplace {
        find: String,
        replacement: Option<String>,
        all_sheets: bool,
    },
}

impl BatchRequest {
    /// The descriptor object for this request.
    pub fn to_value(&self) -> Value {
        match self {
            Self::AddSheet { title } => json!({
                "addSheet": { "properties": { "title": title } }
            }),
            Self::DeleteSheet { sheet_id } => json!({
                "deleteSheet": { "sheetId": sheet_id }
            }),
            Self::RenameSheet { sheet_id, title } => json!({
                "updateSheetProperties": {
                    "properties": { "sheetId": sheet_id, "title": title },
                    "fields": "title"
                }
            }),
            Self::DeleteDimension {
                sheet_id,
                dimension,
                start_index,
                end_index,
            } => json!({
                "deleteDimension": {
                    "range": {
                        "sheetId": sheet_id,
                        "dimension": dimension.as_str(),
                        "startIndex": start_index,
                        "endIndex": end_index
                    }
                }
            }),
            Self::FormatCell {
                sheet_id,
                row,
                col,
                background,
            } => json!({
                "repeatCell": {
                    "range": {
                        "sheetId": sheet_id,
                        "startRowIndex": row,
                        "endRowIndex": row + 1,
                        "startColumnIndex": col,
                        "endColumnIndex": col + 1
                    },
                    "cell": {
                        "userEnteredFormat": {
                            "backgroundColor": background.to_value()
                        }
                    },
                    "fields": "userEnteredFormat.backgroundColor"
                }
            }),
            Self::SortRange {
                range,
                column_index,
            } => json!({
                "sortRange": {
                    "range": range,
                    "sortSpecs": [{
                        "dimensionIndex": column_index,
                        "sortOrder": "ASCENDING"
                    }]
                }
            }),
            Self::MergeCells { range } => json!({
                "mergeCells": { "range": range, "mergeType": "MERGE_ALL" }
            }),
            Self::FindReplace {
                find,
                replacement,
                all_sheets,
            } => {
                let mut params = json!({ "find": find, "allSheets": all_sheets });
                if let Some(replacement) = replacement {
                    params["replacement"] = json!(replacement);
                }
                json!({ "findReplace": params })
            }
        }
    }
}

/// Wraps descriptors, in order, into the `{"requests": [...]}` body.
pub fn to_requests_body(requests: &[BatchRequest]) -> Value {
    let descriptors: Vec<Value> = requests.iter().map(BatchRequest::to_value).collect();
    json!({ "requests": descriptors })
}
