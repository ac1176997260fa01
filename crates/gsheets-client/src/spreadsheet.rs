//! Spreadsheet-level and structural operations.
//!
//! Structural edits all go through [`SheetsClient::batch_update`]; the
//! named operations are convenience wrappers supplying one descriptor
//! each. Callers needing several edits in one transaction build the
//! descriptor slice themselves.

use crate::client::SheetsClient;
use gsheets_core::batch::{self, BatchRequest, Color, Dimension};
use gsheets_core::{Result, SheetsError};
use serde::Deserialize;
use serde_json::Value;

/// Identity of one sheet inside the spreadsheet, extracted from the
/// metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    pub sheet_id: i64,
    pub title: String,
    #[serde(default)]
    pub index: i64,
}

impl SheetsClient {
    /// Creates a new spreadsheet and returns its id.
    ///
    /// Only the token is used; the client stays bound to its original
    /// spreadsheet id.
    pub fn create_spreadsheet(&self, title: &str) -> Result<String> {
        let body = serde_json::json!({ "properties": { "title": title } });
        let response = self.post(&self.root_url(), body)?.into_result()?;
        let document = response.json()?;
        document
            .get("spreadsheetId")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| SheetsError::Parse("response lacks `spreadsheetId`".into()))
    }

    /// Lists the sheets of the spreadsheet from its metadata.
    pub fn sheet_properties(&self) -> Result<Vec<SheetProperties>> {
        let response = self.get(&self.spreadsheet_url(""))?.into_result()?;
        let document = response.json()?;
        let sheets = match document.get("sheets") {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(sheets) => sheets
                .as_array()
                .ok_or_else(|| SheetsError::Parse("`sheets` is not an array".into()))?,
        };

        sheets
            .iter()
            .map(|sheet| {
                let properties = sheet
                    .get("properties")
                    .ok_or_else(|| SheetsError::Parse("sheet entry lacks `properties`".into()))?;
                serde_json::from_value(properties.clone())
                    .map_err(|e| SheetsError::Parse(format!("bad sheet properties: {}", e)))
            })
            .collect()
    }

    /// The revision history document of the spreadsheet.
    pub fn revisions(&self) -> Result<Value> {
        self.get(&self.spreadsheet_url("/revisions"))?
            .into_result()?
            .json()
    }

    /// Applies an ordered sequence of structural edits in one call. The
    /// endpoint is transactional: every descriptor is applied or none is.
    ///
    /// An empty sequence is rejected locally with `InvalidArgument`; the
    /// upstream endpoint answers HTTP 400 for an empty `requests` array,
    /// so failing before the network call loses nothing.
    pub fn batch_update(&self, requests: &[BatchRequest]) -> Result<Value> {
        if requests.is_empty() {
            return Err(SheetsError::InvalidArgument(
                "batch update with no requests".into(),
            ));
        }
        let url = self.spreadsheet_url(":batchUpdate");
        self.post(&url, batch::to_requests_body(requests))?
            .into_result()?
            .json()
    }

    /// Adds a sheet and returns the id the API assigned to it.
    pub fn add_sheet(&self, title: &str) -> Result<i64> {
        let reply = self.batch_update(&[BatchRequest::AddSheet {
            title: title.to_string(),
        }])?;
        reply
            .pointer("/replies/0/addSheet/properties/sheetId")
            .and_then(Value::as_i64)
            .ok_or_else(|| SheetsError::Parse("addSheet reply lacks `sheetId`".into()))
    }

    /// Deletes a sheet by id.
    pub fn delete_sheet(&self, sheet_id: i64) -> Result<()> {
        self.batch_update(&[BatchRequest::DeleteSheet { sheet_id }])?;
        Ok(())
    }

    /// Renames a sheet.
    pub fn rename_sheet(&self, sheet_id: i64, new_title: &str) -> Result<()> {
        self.batch_update(&[BatchRequest::RenameSheet {
            sheet_id,
            title: new_title.to_string(),
        }])?;
        Ok(())
    }

    /// Deletes one row by zero-based index.
    pub fn delete_row(&self, sheet_id: i64, row: i64) -> Result<()> {
        self.batch_update(&[BatchRequest::DeleteDimension {
            sheet_id,
            dimension: Dimension::Rows,
            start_index: row,
            end_index: row + 1,
        }])?;
        Ok(())
    }

    /// Sets the background color of one cell, zero-based row and column.
    pub fn format_cell(&self, sheet_id: i64, row: i64, col: i64, background: Color) -> Result<()> {
        self.batch_update(&[BatchRequest::FormatCell {
            sheet_id,
            row,
            col,
            background,
        }])?;
        Ok(())
    }

    /// Sorts a range ascending by the zero-based column index.
    pub fn sort_range(&self, range: &str, column_index: u32) -> Result<()> {
        self.batch_update(&[BatchRequest::SortRange {
            range: range.to_string(),
            column_index,
        }])?;
        Ok(())
    }

    /// Merges every cell of the range into one.
    pub fn merge_cells(&self, range: &str) -> Result<()> {
        self.batch_update(&[BatchRequest::MergeCells {
            range: range.to_string(),
        }])?;
        Ok(())
    }

    /// Finds `query` across all sheets and returns the matching cell
    /// references the API reports. A reply without match data yields an
    /// empty list, not an error.
    pub fn search(&self, query: &str) -> Result<Vec<String>> {
        let reply = self.batch_update(&[BatchRequest::FindReplace {
            find: query.to_string(),
            replacement: None,
            all_sheets: true,
        }])?;

        let mut cells = Vec::new();
        if let Some(replies) = reply.get("replies").and_then(Value::as_array) {
            for entry in replies {
                let matches = entry
                    .pointer("/findReplace/matches")
                    .and_then(Value::as_array);
                if let Some(matches) = matches {
                    for found in matches {
                        if let Some(cell) = found.get("cell").and_then(Value::as_str) {
                            cells.push(cell.to_string());
                        }
                    }
                }
            }
        }
        Ok(cells)
    }
}
