//! Builder API for assembling batch requests.
//!
//! [`BatchBuilder`] accumulates logical edits and is consumed by value at
//! [`BatchBuilder::build`]; the resulting [`BatchRequest`] is what gets
//! submitted. Coordinate violations are rejected here, at the point the
//! edit is added, so a malformed edit can never reach a transport.
//!
//! # Example
//!
//! ```rust
//! use sheetrec::{BatchBuilder, CellValue, SheetRange};
//!
//! let batch = BatchBuilder::new("Contacts")
//!     .delete_row(5)?
//!     .update_cell(SheetRange::cell("Contacts", 2, 3)?, CellValue::from("ok"))
//!     .build();
//! assert_eq!(batch.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::error::{Axis, CoordError};
use crate::model::edit::{AppendRows, BatchRequest, DeleteRow, Edit, UpdateCells};
use crate::model::range::SheetRange;
use crate::model::record::SheetRecord;
use crate::model::value::CellValue;

/// Accumulates edits targeting one tab.
#[derive(Debug, Clone)]
pub struct BatchBuilder {
    tab: String,
    edits: Vec<Edit>,
}

impl BatchBuilder {
    /// Creates an empty builder for the given tab.
    pub fn new(tab: impl Into<String>) -> Self {
        Self {
            tab: tab.into(),
            edits: Vec::new(),
        }
    }

    /// Adds an append of a single record.
    pub fn append_record<R: SheetRecord>(self, record: &R) -> Self {
        self.append_records(std::slice::from_ref(record))
    }

    /// Adds an append of `records`, one row per record, in input order.
    ///
    /// Rows land after the last existing row of the tab; no row numbers
    /// are assigned or read back.
    pub fn append_records<R: SheetRecord>(mut self, records: &[R]) -> Self {
        if records.is_empty() {
            return self;
        }
        let rows = records
            .iter()
            .map(|record| record.to_cells(&self.tab))
            .collect();
        self.edits.push(Edit::AppendRows(AppendRows { rows }));
        self
    }

    /// Adds a deletion of the given 1-based row.
    pub fn delete_row(mut self, row: u32) -> Result<Self, CoordError> {
        if row < 1 {
            return Err(CoordError::Invalid {
                axis: Axis::Row,
                index: row,
            });
        }
        self.edits.push(Edit::DeleteRow(DeleteRow { row }));
        Ok(self)
    }

    /// Adds a full overwrite of the cells in `range` with `value`.
    ///
    /// Every cell field is replaced, formatting included; callers that
    /// need to keep existing formatting must not use this for
    /// cosmetic-only changes.
    pub fn update_cell(mut self, range: SheetRange, value: CellValue) -> Self {
        self.edits.push(Edit::UpdateCells(UpdateCells { range, value }));
        self
    }

    /// Adds one overwrite per `(range, value)` pair, in order.
    pub fn update_cells(mut self, edits: impl IntoIterator<Item = (SheetRange, CellValue)>) -> Self {
        for (range, value) in edits {
            self = self.update_cell(range, value);
        }
        self
    }

    /// Adds one single-cell overwrite per field of `record` at its
    /// resolved row. Fails when the record has never been persisted or
    /// read back (no row to address).
    pub fn update_record<R: SheetRecord>(mut self, record: &R) -> Result<Self, CoordError> {
        let row = record.row().ok_or(CoordError::UnresolvedRow)?;
        for cell in record.to_cells(&self.tab) {
            let range = SheetRange::cell(self.tab.clone(), row, cell.column)?;
            self = self.update_cell(range, cell.value);
        }
        Ok(self)
    }

    /// Adds a raw edit directly.
    pub fn edit(mut self, edit: Edit) -> Self {
        self.edits.push(edit);
        self
    }

    /// Adds multiple raw edits.
    pub fn edits(mut self, edits: impl IntoIterator<Item = Edit>) -> Self {
        self.edits.extend(edits);
        self
    }

    /// Returns the number of edits added so far.
    pub fn edit_count(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Builds the final request.
    pub fn build(self) -> BatchRequest {
        BatchRequest {
            tab: self.tab,
            edits: self.edits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;
    use crate::model::record::{self, PositionedCell};
    use crate::model::value::RawValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Label {
        row: Option<u32>,
        name: String,
        weight: i64,
    }

    impl SheetRecord for Label {
        fn to_cells(&self, _tab: &str) -> Vec<PositionedCell> {
            vec![
                PositionedCell::new(1, self.name.as_str()),
                PositionedCell::new(2, self.weight),
            ]
        }

        fn from_row(values: &[RawValue], row: u32) -> Result<Self, RecordError> {
            Ok(Self {
                row: Some(row),
                name: record::optional_string(values, 1, row),
                weight: record::required_i64(values, 2, row)?,
            })
        }

        fn row(&self) -> Option<u32> {
            self.row
        }
    }

    fn label(name: &str, weight: i64) -> Label {
        Label {
            row: None,
            name: name.to_string(),
            weight,
        }
    }

    #[test]
    fn test_append_preserves_record_and_field_order() {
        let batch = BatchBuilder::new("T")
            .append_records(&[label("a", 1), label("b", 2)])
            .build();

        assert_eq!(batch.len(), 1);
        let Edit::AppendRows(append) = &batch.edits[0] else {
            panic!("expected AppendRows");
        };
        assert_eq!(append.rows.len(), 2);
        assert_eq!(append.rows[0][0].value, CellValue::from("a"));
        assert_eq!(append.rows[0][1].value, CellValue::from(1i64));
        assert_eq!(append.rows[1][0].value, CellValue::from("b"));
    }

    #[test]
    fn test_append_empty_slice_adds_nothing() {
        let builder = BatchBuilder::new("T").append_records::<Label>(&[]);
        assert!(builder.is_empty());
    }

    #[test]
    fn test_delete_row_rejects_zero() {
        assert_eq!(
            BatchBuilder::new("T").delete_row(0).unwrap_err(),
            CoordError::Invalid {
                axis: Axis::Row,
                index: 0
            }
        );
    }

    #[test]
    fn test_edit_order_is_submission_order() {
        let range = SheetRange::cell("T", 1, 1).unwrap();
        let batch = BatchBuilder::new("T")
            .append_record(&label("x", 9))
            .delete_row(4)
            .unwrap()
            .update_cell(range, CellValue::from(true))
            .build();

        assert!(matches!(batch.edits[0], Edit::AppendRows(_)));
        assert!(matches!(batch.edits[1], Edit::DeleteRow(DeleteRow { row: 4 })));
        assert!(matches!(batch.edits[2], Edit::UpdateCells(_)));
    }

    #[test]
    fn test_update_record_needs_resolved_row() {
        let unsaved = label("x", 1);
        assert_eq!(
            BatchBuilder::new("T").update_record(&unsaved).unwrap_err(),
            CoordError::UnresolvedRow
        );

        let saved = Label {
            row: Some(7),
            ..label("x", 1)
        };
        let batch = BatchBuilder::new("T").update_record(&saved).unwrap().build();
        assert_eq!(batch.len(), 2);
        let Edit::UpdateCells(update) = &batch.edits[1] else {
            panic!("expected UpdateCells");
        };
        assert_eq!(update.range.a1_notation(), "T!B7");
        assert_eq!(update.value, CellValue::from(1i64));
    }
}
