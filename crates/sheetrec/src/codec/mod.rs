//! Translation from the edit model to the service wire format.
//!
//! Encoding is pure: it never mutates its inputs and performs no I/O.
//! All coordinate arithmetic funnels through [`crate::model::coord`], so
//! 1-based inclusive bounds become 0-based half-open bounds exactly once.

pub mod wire;

use crate::error::{Axis, CoordError};
use crate::model::coord;
use crate::model::edit::{BatchRequest, Edit};
use crate::model::range::SheetRange;
use crate::model::record::PositionedCell;
use crate::model::value::CellValue;

/// Field mask requesting a full overwrite of every cell field,
/// formatting included.
pub const ALL_FIELDS: &str = "*";

/// Number format type attached to date cells.
const DATE_FORMAT_KIND: &str = "DATE";
const DATE_FORMAT_PATTERN: &str = "yyyy-mm-dd";

/// Encodes a whole batch against the resolved numeric tab id.
pub fn encode_batch(
    batch: &BatchRequest,
    sheet_id: i64,
) -> Result<wire::BatchUpdateRequest, CoordError> {
    let mut requests = Vec::with_capacity(batch.edits.len());
    for edit in &batch.edits {
        requests.push(encode_edit(edit, sheet_id)?);
    }
    Ok(wire::BatchUpdateRequest { requests })
}

/// Encodes one logical edit.
pub fn encode_edit(edit: &Edit, sheet_id: i64) -> Result<wire::Request, CoordError> {
    match edit {
        Edit::AppendRows(append) => Ok(wire::Request {
            append_cells: Some(wire::AppendCellsRequest {
                sheet_id,
                rows: append.rows.iter().map(|row| encode_row(row)).collect(),
                fields: ALL_FIELDS.to_string(),
            }),
            ..Default::default()
        }),
        Edit::DeleteRow(delete) => {
            let (start_index, end_index) =
                coord::to_service_span(delete.row, delete.row, Axis::Row)?;
            Ok(wire::Request {
                delete_dimension: Some(wire::DeleteDimensionRequest {
                    range: wire::DimensionRange {
                        sheet_id,
                        dimension: wire::Dimension::Rows,
                        start_index,
                        end_index,
                    },
                }),
                ..Default::default()
            })
        }
        Edit::UpdateCells(update) => Ok(wire::Request {
            repeat_cell: Some(wire::RepeatCellRequest {
                range: grid_range(&update.range, sheet_id)?,
                cell: encode_cell(&update.value),
                fields: ALL_FIELDS.to_string(),
            }),
            ..Default::default()
        }),
    }
}

/// Encodes one row of cells for an append.
///
/// Cells are emitted in the order given; appended rows are laid out from
/// the first column of the tab's data region, so column positions are
/// not repeated here.
pub fn encode_row(cells: &[PositionedCell]) -> wire::RowData {
    wire::RowData {
        values: cells.iter().map(|cell| encode_cell(&cell.value)).collect(),
    }
}

/// Encodes one logical value as wire cell data.
pub fn encode_cell(value: &CellValue) -> wire::CellData {
    match value {
        CellValue::Empty => wire::CellData::default(),
        CellValue::Text(text) => wire::CellData {
            user_entered_value: Some(wire::ExtendedValue {
                string_value: Some(text.clone()),
                ..Default::default()
            }),
            user_entered_format: None,
        },
        CellValue::Number(number) => wire::CellData {
            user_entered_value: Some(wire::ExtendedValue {
                number_value: Some(*number),
                ..Default::default()
            }),
            user_entered_format: None,
        },
        CellValue::Bool(flag) => wire::CellData {
            user_entered_value: Some(wire::ExtendedValue {
                bool_value: Some(*flag),
                ..Default::default()
            }),
            user_entered_format: None,
        },
        CellValue::DateSerial(serial) => wire::CellData {
            user_entered_value: Some(wire::ExtendedValue {
                number_value: Some(*serial),
                ..Default::default()
            }),
            user_entered_format: Some(wire::CellFormat {
                number_format: Some(wire::NumberFormat {
                    kind: DATE_FORMAT_KIND.to_string(),
                    pattern: Some(DATE_FORMAT_PATTERN.to_string()),
                }),
            }),
        },
    }
}

/// Translates a user-space range to a service grid range.
///
/// Inclusive starts shift down by one; inclusive ends keep their value
/// and become exclusive. Open-ended sides are omitted entirely.
pub fn grid_range(range: &SheetRange, sheet_id: i64) -> Result<wire::GridRange, CoordError> {
    let mut grid = wire::GridRange {
        sheet_id,
        ..Default::default()
    };
    if let Some(row) = range.start_row() {
        grid.start_row_index = Some(coord::to_service_row(row)?);
    }
    if let Some(col) = range.start_col() {
        grid.start_column_index = Some(coord::to_service_col(col)?);
    }
    if let Some(row) = range.end_row() {
        grid.end_row_index = Some(i64::from(row));
    }
    if let Some(col) = range.end_col() {
        grid.end_column_index = Some(i64::from(col));
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::edit::{AppendRows, DeleteRow, UpdateCells};

    #[test]
    fn test_delete_row_is_half_open_on_rows() {
        let edit = Edit::DeleteRow(DeleteRow { row: 5 });
        let request = encode_edit(&edit, 7).unwrap();
        let range = request.delete_dimension.unwrap().range;
        assert_eq!(range.dimension, wire::Dimension::Rows);
        assert_eq!((range.start_index, range.end_index), (4, 5));
        assert_eq!(range.sheet_id, 7);

        let first = encode_edit(&Edit::DeleteRow(DeleteRow { row: 1 }), 7).unwrap();
        let range = first.delete_dimension.unwrap().range;
        assert_eq!((range.start_index, range.end_index), (0, 1));
    }

    #[test]
    fn test_single_cell_update_grid_range() {
        let range = SheetRange::cell("T", 2, 3).unwrap();
        let edit = Edit::UpdateCells(UpdateCells {
            range,
            value: CellValue::from("x"),
        });
        let request = encode_edit(&edit, 0).unwrap();
        let repeat = request.repeat_cell.unwrap();
        assert_eq!(repeat.fields, "*");
        let grid = repeat.range;
        assert_eq!(grid.start_row_index, Some(1));
        assert_eq!(grid.end_row_index, Some(2));
        assert_eq!(grid.start_column_index, Some(2));
        assert_eq!(grid.end_column_index, Some(3));
    }

    #[test]
    fn test_append_carries_no_row_index() {
        let edit = Edit::AppendRows(AppendRows {
            rows: vec![vec![
                PositionedCell::new(1, "name"),
                PositionedCell::new(2, 42i64),
            ]],
        });
        let request = encode_edit(&edit, 3).unwrap();
        let append = request.append_cells.as_ref().unwrap();
        assert_eq!(append.fields, "*");
        assert_eq!(append.rows.len(), 1);
        assert_eq!(append.rows[0].values.len(), 2);

        // Appends target "after the last row"; nothing in the encoded
        // JSON may pin an explicit row.
        let encoded = serde_json::to_string(&request).unwrap();
        assert!(!encoded.contains("rowIndex"));
        assert!(!encoded.contains("RowIndex"));
    }

    #[test]
    fn test_encode_cell_shapes() {
        assert_eq!(encode_cell(&CellValue::Empty), wire::CellData::default());

        let number = encode_cell(&CellValue::Number(2.5));
        assert_eq!(
            number.user_entered_value.unwrap().number_value,
            Some(2.5)
        );

        let date = encode_cell(&CellValue::date(1970, 1, 1).unwrap());
        assert_eq!(
            date.user_entered_value.unwrap().number_value,
            Some(25_569.0)
        );
        let format = date.user_entered_format.unwrap().number_format.unwrap();
        assert_eq!(format.kind, "DATE");
    }

    #[test]
    fn test_open_ended_range_omits_indices() {
        let range = SheetRange::columns("T", 1, 3).unwrap();
        let grid = grid_range(&range, 1).unwrap();
        assert_eq!(grid.start_row_index, None);
        assert_eq!(grid.end_row_index, None);
        assert_eq!(grid.start_column_index, Some(0));
        assert_eq!(grid.end_column_index, Some(3));
    }

    #[test]
    fn test_batch_preserves_edit_order() {
        let batch = BatchRequest {
            tab: "T".to_string(),
            edits: vec![
                Edit::DeleteRow(DeleteRow { row: 2 }),
                Edit::DeleteRow(DeleteRow { row: 9 }),
            ],
        };
        let encoded = encode_batch(&batch, 1).unwrap();
        assert_eq!(encoded.requests.len(), 2);
        let starts: Vec<i64> = encoded
            .requests
            .iter()
            .map(|r| r.delete_dimension.as_ref().unwrap().range.start_index)
            .collect();
        assert_eq!(starts, vec![1, 8]);
    }
}
