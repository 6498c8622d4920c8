//! Wire shapes for the remote spreadsheet service.
//!
//! These serialize to the camelCase JSON the service's batch-update and
//! values surfaces expect. Optional fields are skipped when absent so a
//! request carries exactly what it means: an omitted range index means
//! "unbounded on that side", never zero.

use serde::{Deserialize, Serialize};

use crate::model::value::RawValue;

/// Properties of one tab, as returned by tab resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    pub sheet_id: i64,
    pub title: String,
}

/// A rectangular region in service coordinates: 0-based, half-open on
/// both axes. Missing indices leave that side unbounded.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRange {
    pub sheet_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_row_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_row_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_column_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_column_index: Option<i64>,
}

/// A span along one dimension in service coordinates (half-open).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionRange {
    pub sheet_id: i64,
    pub dimension: Dimension,
    pub start_index: i64,
    pub end_index: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "ROWS")]
    Rows,
    #[serde(rename = "COLUMNS")]
    Columns,
}

/// The untyped value slot of a cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bool_value: Option<bool>,
}

/// Display format metadata attached to a cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellFormat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_format: Option<NumberFormat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberFormat {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// One cell of a write request: value plus optional formatting.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_entered_value: Option<ExtendedValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_entered_format: Option<CellFormat>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowData {
    pub values: Vec<CellData>,
}

/// Appends rows after the last row with data in the sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendCellsRequest {
    pub sheet_id: i64,
    pub rows: Vec<RowData>,
    pub fields: String,
}

/// Repeats one cell across a grid range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatCellRequest {
    pub range: GridRange,
    pub cell: CellData,
    pub fields: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDimensionRequest {
    pub range: DimensionRange,
}

/// One edit of a batch-update call. Exactly one variant field is set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append_cells: Option<AppendCellsRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat_cell: Option<RepeatCellRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_dimension: Option<DeleteDimensionRequest>,
}

/// An ordered batch of edits applied as one atomic transaction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateRequest {
    pub requests: Vec<Request>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateResponse {
    #[serde(default)]
    pub spreadsheet_id: String,
    #[serde(default)]
    pub replies: Vec<RawValue>,
}

/// Raw values read from a range. `values` omits trailing empty rows and
/// cells; a missing grid deserializes as empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<RawValue>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_camel_case_and_skips_absent() {
        let request = Request {
            delete_dimension: Some(DeleteDimensionRequest {
                range: DimensionRange {
                    sheet_id: 99,
                    dimension: Dimension::Rows,
                    start_index: 4,
                    end_index: 5,
                },
            }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "deleteDimension": {
                    "range": {
                        "sheetId": 99,
                        "dimension": "ROWS",
                        "startIndex": 4,
                        "endIndex": 5,
                    }
                }
            })
        );
    }

    #[test]
    fn test_grid_range_omits_unbounded_sides() {
        let range = GridRange {
            sheet_id: 1,
            start_row_index: Some(0),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&range).unwrap(),
            json!({"sheetId": 1, "startRowIndex": 0})
        );
    }

    #[test]
    fn test_value_range_tolerates_missing_values() {
        let parsed: ValueRange =
            serde_json::from_value(json!({"range": "T!A1:B2"})).unwrap();
        assert_eq!(parsed.range.as_deref(), Some("T!A1:B2"));
        assert!(parsed.values.is_empty());
    }
}
