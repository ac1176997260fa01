//! Integration tests against a local HTTP mock of the Sheets API.

use gsheets_client::{BatchRequest, ClientConfig, Color, Grid, SheetsClient, SheetsError};
use mockito::{Matcher, Server};
use serde_json::json;

fn client_for(server: &Server) -> SheetsClient {
    SheetsClient::with_config(
        "test-token",
        "sheet-1",
        ClientConfig::new().base_url(server.url()),
    )
    .unwrap()
}

#[test]
fn read_range_parses_grid() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/sheet-1/values/Sheet1%21A1%3AB2")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"range": "Sheet1!A1:B2", "values": [["a", "b"], ["c", "d"]]}"#)
        .create();

    let grid = client_for(&server).read_range("Sheet1!A1:B2").unwrap();

    mock.assert();
    assert_eq!(grid.row_count(), 2);
    assert_eq!(grid.cell(0, 0), Some("a"));
    assert_eq!(grid.cell(1, 1), Some("d"));
    assert!(grid.is_rectangular());
}

#[test]
fn read_range_treats_absent_values_as_empty() {
    let mut server = Server::new();
    server
        .mock("GET", "/sheet-1/values/Empty%21A1%3AB2")
        .with_status(200)
        .with_body(r#"{"range": "Empty!A1:B2"}"#)
        .create();

    let grid = client_for(&server).read_range("Empty!A1:B2").unwrap();
    assert!(grid.is_empty());
}

#[test]
fn read_range_preserves_jagged_rows_and_null_cells() {
    let mut server = Server::new();
    server
        .mock("GET", "/sheet-1/values/Sheet1%21A1%3AC2")
        .with_status(200)
        .with_body(r#"{"values": [["a", null, "c"], ["d"]]}"#)
        .create();

    let grid = client_for(&server).read_range("Sheet1!A1:C2").unwrap();
    assert_eq!(grid.cell(0, 1), Some(""));
    assert_eq!(grid.rows()[1].len(), 1);
    assert!(!grid.is_rectangular());
}

#[test]
fn read_range_surfaces_api_error_without_retry() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/sheet-1/values/Sheet1%21A1")
        .with_status(403)
        .with_body(r#"{"error": {"status": "PERMISSION_DENIED"}}"#)
        .expect(1)
        .create();

    let err = client_for(&server).read_range("Sheet1!A1").unwrap_err();

    mock.assert();
    match err {
        SheetsError::Api { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("PERMISSION_DENIED"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn read_range_rejects_invalid_json() {
    let mut server = Server::new();
    server
        .mock("GET", "/sheet-1/values/Sheet1%21A1")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create();

    let err = client_for(&server).read_range("Sheet1!A1").unwrap_err();
    assert!(matches!(err, SheetsError::Parse(_)));
}

#[test]
fn read_cell_uses_a1_notation() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/sheet-1/values/B3")
        .with_status(200)
        .with_body(r#"{"values": [["hit"]]}"#)
        .create();

    let grid = client_for(&server).read_cell(2, 1).unwrap();

    mock.assert();
    assert_eq!(grid.cell(0, 0), Some("hit"));
}

#[test]
fn write_range_puts_raw_values() {
    let mut server = Server::new();
    let mock = server
        .mock("PUT", "/sheet-1/values/Sheet1%21A1%3AB2?valueInputOption=RAW")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "values": [["a", "b"], ["c", "d"]]
        })))
        .with_status(200)
        .with_body("{}")
        .create();

    let grid = Grid::from_rows(vec![
        vec!["a".to_string(), "b".to_string()],
        vec!["c".to_string(), "d".to_string()],
    ]);
    client_for(&server).write_range("Sheet1!A1:B2", &grid).unwrap();

    mock.assert();
}

#[test]
fn write_range_surfaces_api_error() {
    let mut server = Server::new();
    server
        .mock("PUT", "/sheet-1/values/Sheet1%21A1?valueInputOption=RAW")
        .with_status(400)
        .with_body("bad range")
        .create();

    let err = client_for(&server)
        .write_range("Sheet1!A1", &Grid::single_row(["x"]))
        .unwrap_err();
    assert!(matches!(err, SheetsError::Api { status: 400, .. }));
}

#[test]
fn append_row_uses_append_endpoint() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/sheet-1/values/Log:append?valueInputOption=RAW")
        .match_body(Matcher::Json(json!({ "values": [["x", "y"]] })))
        .with_status(200)
        .with_body("{}")
        .create();

    client_for(&server).append_row("Log", ["x", "y"]).unwrap();

    mock.assert();
}

#[test]
fn set_formula_sends_user_entered() {
    let mut server = Server::new();
    let mock = server
        .mock("PUT", "/sheet-1/values/B7?valueInputOption=USER_ENTERED")
        .match_body(Matcher::Json(json!({ "values": [["=SUM(A1:A5)"]] })))
        .with_status(200)
        .with_body("{}")
        .create();

    client_for(&server).set_formula("B7", "=SUM(A1:A5)").unwrap();

    mock.assert();
}

#[test]
fn clear_range_posts_clear() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/sheet-1/values/Sheet1%21A1%3AB2:clear")
        .with_status(200)
        .with_body("{}")
        .create();

    client_for(&server).clear_range("Sheet1!A1:B2").unwrap();

    mock.assert();
}

#[test]
fn export_csv_writes_quoted_file() {
    let mut server = Server::new();
    server
        .mock("GET", "/sheet-1/values/Sheet1%21A1%3AB2")
        .with_status(200)
        .with_body(r#"{"values": [["a", "b"], ["c,d", "e\"f"]]}"#)
        .create();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.csv");
    client_for(&server).export_csv("Sheet1!A1:B2", &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "a,b\n\"c,d\",\"e\"\"f\"\n");
}

#[test]
fn create_spreadsheet_posts_nested_title_and_returns_id() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::Json(json!({ "properties": { "title": "Budget" } })))
        .with_status(200)
        .with_body(r#"{"spreadsheetId": "new-spreadsheet-id"}"#)
        .create();

    let id = client_for(&server).create_spreadsheet("Budget").unwrap();

    mock.assert();
    assert_eq!(id, "new-spreadsheet-id");
}

#[test]
fn sheet_properties_parses_metadata() {
    let mut server = Server::new();
    server
        .mock("GET", "/sheet-1")
        .with_status(200)
        .with_body(
            r#"{
                "spreadsheetId": "sheet-1",
                "sheets": [
                    {"properties": {"sheetId": 0, "title": "Sheet1", "index": 0}},
                    {"properties": {"sheetId": 42, "title": "Budget", "index": 1}}
                ]
            }"#,
        )
        .create();

    let sheets = client_for(&server).sheet_properties().unwrap();
    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[1].sheet_id, 42);
    assert_eq!(sheets[1].title, "Budget");
}

#[test]
fn revisions_returns_document() {
    let mut server = Server::new();
    server
        .mock("GET", "/sheet-1/revisions")
        .with_status(200)
        .with_body(r#"{"revisions": [{"id": "1"}, {"id": "2"}]}"#)
        .create();

    let document = client_for(&server).revisions().unwrap();
    assert_eq!(document["revisions"].as_array().unwrap().len(), 2);
}

#[test]
fn batch_update_with_no_requests_is_invalid_argument() {
    let server = Server::new();
    let err = client_for(&server).batch_update(&[]).unwrap_err();
    assert!(matches!(err, SheetsError::InvalidArgument(_)));
}

#[test]
fn batch_update_sends_ordered_descriptors() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/sheet-1:batchUpdate")
        .match_body(Matcher::Json(json!({
            "requests": [
                { "addSheet": { "properties": { "title": "Log" } } },
                { "deleteSheet": { "sheetId": 7 } }
            ]
        })))
        .with_status(200)
        .with_body(r#"{"spreadsheetId": "sheet-1", "replies": [{}, {}]}"#)
        .create();

    client_for(&server)
        .batch_update(&[
            BatchRequest::AddSheet {
                title: "Log".to_string(),
            },
            BatchRequest::DeleteSheet { sheet_id: 7 },
        ])
        .unwrap();

    mock.assert();
}

#[test]
fn add_sheet_returns_assigned_id() {
    let mut server = Server::new();
    server
        .mock("POST", "/sheet-1:batchUpdate")
        .with_status(200)
        .with_body(
            r#"{"replies": [{"addSheet": {"properties": {"sheetId": 1234, "title": "Log"}}}]}"#,
        )
        .create();

    let sheet_id = client_for(&server).add_sheet("Log").unwrap();
    assert_eq!(sheet_id, 1234);
}

#[test]
fn sort_range_sends_single_ascending_sort_spec() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/sheet-1:batchUpdate")
        .match_body(Matcher::Json(json!({
            "requests": [{
                "sortRange": {
                    "range": "Sheet1!A1:C10",
                    "sortSpecs": [{ "dimensionIndex": 2, "sortOrder": "ASCENDING" }]
                }
            }]
        })))
        .with_status(200)
        .with_body(r#"{"replies": [{}]}"#)
        .create();

    client_for(&server).sort_range("Sheet1!A1:C10", 2).unwrap();

    mock.assert();
}

#[test]
fn delete_row_sends_row_bounds() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/sheet-1:batchUpdate")
        .match_body(Matcher::Json(json!({
            "requests": [{
                "deleteDimension": {
                    "range": {
                        "sheetId": 0,
                        "dimension": "ROWS",
                        "startIndex": 4,
                        "endIndex": 5
                    }
                }
            }]
        })))
        .with_status(200)
        .with_body(r#"{"replies": [{}]}"#)
        .create();

    client_for(&server).delete_row(0, 4).unwrap();

    mock.assert();
}

#[test]
fn format_cell_sends_background_mask() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/sheet-1:batchUpdate")
        .match_body(Matcher::PartialJson(json!({
            "requests": [{
                "repeatCell": { "fields": "userEnteredFormat.backgroundColor" }
            }]
        })))
        .with_status(200)
        .with_body(r#"{"replies": [{}]}"#)
        .create();

    client_for(&server)
        .format_cell(0, 1, 2, Color::from_rgb(255, 255, 0))
        .unwrap();

    mock.assert();
}

#[test]
fn search_extracts_match_cells() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/sheet-1:batchUpdate")
        .match_body(Matcher::Json(json!({
            "requests": [{ "findReplace": { "find": "needle", "allSheets": true } }]
        })))
        .with_status(200)
        .with_body(
            r#"{
                "replies": [{
                    "findReplace": {
                        "matches": [{"cell": "Sheet1!B2"}, {"cell": "Log!A7"}]
                    }
                }]
            }"#,
        )
        .create();

    let cells = client_for(&server).search("needle").unwrap();

    mock.assert();
    assert_eq!(cells, vec!["Sheet1!B2".to_string(), "Log!A7".to_string()]);
}

#[test]
fn search_without_matches_yields_empty() {
    let mut server = Server::new();
    server
        .mock("POST", "/sheet-1:batchUpdate")
        .with_status(200)
        .with_body(r#"{"replies": [{"findReplace": {"occurrencesChanged": 0}}]}"#)
        .create();

    let cells = client_for(&server).search("missing").unwrap();
    assert!(cells.is_empty());
}

#[test]
fn transport_failure_is_transport_error() {
    // Nothing listens on this port; the connection is refused.
    let client = SheetsClient::with_config(
        "test-token",
        "sheet-1",
        ClientConfig::new()
            .base_url("http://127.0.0.1:9")
            .timeout(std::time::Duration::from_secs(2))
            .connect_timeout(std::time::Duration::from_secs(1)),
    )
    .unwrap();

    let err = client.read_range("Sheet1!A1").unwrap_err();
    assert!(matches!(err, SheetsError::Transport(_)));
    assert!(err.is_retryable());
}
