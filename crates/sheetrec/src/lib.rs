//! sheetrec: typed records over a single spreadsheet tab.
//!
//! This crate maps application records onto one tab of a remote
//! spreadsheet: append, read, update, and delete rows without writing
//! raw range or cell payloads by hand.
//!
//! # Overview
//!
//! The core reconciles two coordinate systems. Callers address the grid
//! the way the spreadsheet UI does — 1-based rows and columns, inclusive
//! ranges, `Sheet1!B2:C5` notation — while the remote service wants
//! 0-based, half-open indices. Translation happens exactly once, when a
//! batch is encoded, and bad coordinates are rejected before anything
//! reaches the network.
//!
//! # Quick Start
//!
//! ```rust
//! use sheetrec::wire;
//! use sheetrec::{
//!     record, PositionedCell, RawValue, RecordError, SheetRecord, SheetSession,
//!     SheetsTransport, TransportError,
//! };
//!
//! // A record type maps its fields to columns.
//! #[derive(Debug, PartialEq)]
//! struct Contact {
//!     row: Option<u32>,
//!     name: String,
//!     age: i64,
//! }
//!
//! impl SheetRecord for Contact {
//!     fn to_cells(&self, _tab: &str) -> Vec<PositionedCell> {
//!         vec![
//!             PositionedCell::new(1, self.name.as_str()),
//!             PositionedCell::new(2, self.age),
//!         ]
//!     }
//!
//!     fn from_row(values: &[RawValue], row: u32) -> Result<Self, RecordError> {
//!         Ok(Self {
//!             row: Some(row),
//!             name: record::optional_string(values, 1, row),
//!             age: record::required_i64(values, 2, row)?,
//!         })
//!     }
//!
//!     fn row(&self) -> Option<u32> {
//!         self.row
//!     }
//! }
//!
//! // The transport is the I/O boundary; tests and examples stub it.
//! struct NullTransport;
//!
//! impl SheetsTransport for NullTransport {
//!     fn list_tabs(&self, _id: &str) -> Result<Vec<wire::SheetProperties>, TransportError> {
//!         Ok(vec![wire::SheetProperties {
//!             sheet_id: 0,
//!             title: "Contacts".to_string(),
//!         }])
//!     }
//!
//!     fn submit_batch(
//!         &self,
//!         _id: &str,
//!         _request: &wire::BatchUpdateRequest,
//!     ) -> Result<wire::BatchUpdateResponse, TransportError> {
//!         Ok(wire::BatchUpdateResponse::default())
//!     }
//!
//!     fn read_range(
//!         &self,
//!         _id: &str,
//!         _range: &str,
//!     ) -> Result<wire::ValueRange, TransportError> {
//!         Ok(wire::ValueRange::default())
//!     }
//! }
//!
//! let session = SheetSession::connect(NullTransport, "spreadsheet-id", Some("contacts"))?;
//! assert_eq!(session.identity().tab_title, "Contacts");
//!
//! session.append_record(&Contact {
//!     row: None,
//!     name: "Alice".to_string(),
//!     age: 30,
//! })?;
//! # Ok::<(), sheetrec::SessionError>(())
//! ```
//!
//! # Modules
//!
//! - [`model`]: Coordinates, ranges, cell values, records, edits, builder
//! - [`codec`]: Model-to-wire translation and the wire shapes
//! - [`session`]: The transport boundary and the session facade
//! - [`error`]: Error types
//! - [`util`]: Date serial number conversion
//!
//! # Guarantees
//!
//! - Coordinate and parse errors are raised synchronously while building;
//!   a malformed request never reaches the transport.
//! - Edits within a batch apply left-to-right as submitted, and a batch
//!   either succeeds entirely or fails as one call.
//! - Remote failures are surfaced unchanged and never retried here;
//!   retry policy belongs to the transport or the caller.

pub mod codec;
pub mod error;
pub mod model;
pub mod session;
pub mod util;

// Re-export commonly used types at crate root
pub use codec::wire;
pub use codec::{ALL_FIELDS, encode_batch, encode_cell, encode_edit, grid_range};
pub use error::{
    Axis, CoordError, FieldKind, RangeError, RecordError, SessionError, TransportError,
};
pub use model::record;
pub use model::{
    AppendRows, BatchBuilder, BatchRequest, CellValue, DeleteRow, Edit, PositionedCell, RawValue,
    SheetRange, SheetRecord, UpdateCells, column_to_letters, letters_to_column, to_service_col,
    to_service_row,
};
pub use session::{SheetIdentity, SheetSession, SheetsTransport};
pub use util::serial::{SerialDateError, serial_from_ymd, ymd_from_serial};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
