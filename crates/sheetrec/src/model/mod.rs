//! Data model types for sheetrec.
//!
//! This module contains the core types for addressing and editing a tab:
//! - Coordinates (1-based user grid, column letters)
//! - Ranges (A1 notation)
//! - Cell values
//! - Records (typed row mapping)
//! - Edits (batched operations)
//! - Builder (ergonomic batch construction)

pub mod builder;
pub mod coord;
pub mod edit;
pub mod range;
pub mod record;
pub mod value;

pub use builder::BatchBuilder;
pub use coord::{column_to_letters, letters_to_column, to_service_col, to_service_row, to_service_span};
pub use edit::{AppendRows, BatchRequest, DeleteRow, Edit, UpdateCells};
pub use range::SheetRange;
pub use record::{PositionedCell, SheetRecord};
pub use value::{CellValue, RawValue};
