//! Edit model: the logical operations that can target a tab.
//!
//! Edits carry user-space (1-based, inclusive) coordinates; translation
//! to service coordinates happens once, in [`crate::codec`].

use crate::model::range::SheetRange;
use crate::model::record::PositionedCell;
use crate::model::value::CellValue;

/// A single logical edit.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    AppendRows(AppendRows),
    DeleteRow(DeleteRow),
    UpdateCells(UpdateCells),
}

/// Appends whole rows after the last existing row of the tab.
///
/// The remote service picks the final row numbers; nothing here names an
/// explicit row index.
#[derive(Debug, Clone, PartialEq)]
pub struct AppendRows {
    /// One entry per appended row, cells in declared field order.
    pub rows: Vec<Vec<PositionedCell>>,
}

/// Removes one row, shifting the rows below it up.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteRow {
    /// 1-based row to remove.
    pub row: u32,
}

/// Overwrites every field of the cells in a range with one value,
/// formatting included. This is a full overwrite, not a sparse patch:
/// formatting not resupplied is discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCells {
    pub range: SheetRange,
    pub value: CellValue,
}

/// An ordered batch of edits submitted as one atomic remote call.
///
/// Edits apply left-to-right exactly as submitted; the batch performs no
/// reordering and resolves no dependencies between its edits. The whole
/// batch succeeds or the whole call fails.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRequest {
    /// Tab context the edits were built for.
    pub tab: String,
    pub edits: Vec<Edit>,
}

impl BatchRequest {
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}
