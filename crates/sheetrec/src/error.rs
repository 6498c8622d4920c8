//! Error types for coordinate translation, range parsing, record mapping,
//! and session submission.

use std::fmt;

use thiserror::Error;

/// Grid axis, carried in coordinate errors for context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Error during user-to-service coordinate translation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    /// A row or column index below 1; user coordinates are 1-based.
    #[error("invalid coordinate: {axis} index {index} ({axis} indices are 1-based)")]
    Invalid { axis: Axis, index: u32 },

    /// A bounded range whose start lies past its end.
    #[error("range start {start} is past end {end} on the {axis} axis")]
    StartPastEnd { axis: Axis, start: u32, end: u32 },

    /// A row-addressed edit was requested for a record that has never been
    /// appended or read back, so it has no row to address.
    #[error("record carries no resolved row number")]
    UnresolvedRow,
}

/// Error when parsing A1-style range notation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    #[error("empty range notation")]
    Empty,

    /// A range endpoint with no leading column letters (e.g. `2:5`).
    #[error("range endpoint {endpoint:?} has no column letters")]
    MissingColumns { endpoint: String },

    #[error("invalid column letters {found:?}")]
    InvalidColumnLetters { found: String },

    #[error("invalid row number {found:?}")]
    InvalidRowNumber { found: String },

    #[error("range notation {input:?} has more than two endpoints")]
    TooManyEndpoints { input: String },

    /// Catch-all for notation that does not fit the grammar at all,
    /// such as an unterminated quoted tab name.
    #[error("malformed range notation {input:?}")]
    Malformed { input: String },

    #[error(transparent)]
    Coord(#[from] CoordError),
}

/// Declared type of a record field, carried in parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Number,
    Bool,
    DateSerial,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => f.write_str("text"),
            FieldKind::Integer => f.write_str("integer"),
            FieldKind::Number => f.write_str("number"),
            FieldKind::Bool => f.write_str("boolean"),
            FieldKind::DateSerial => f.write_str("date serial"),
        }
    }
}

/// Error when coercing a fetched row into a typed record.
///
/// Both variants carry the 1-based row and column of the offending cell.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// A cell held a value that cannot be coerced to the field's type.
    #[error("row {row}, column {column}: expected {expected}, found {found}")]
    TypeMismatch {
        row: u32,
        column: u32,
        expected: FieldKind,
        found: String,
    },

    /// A required field's cell was empty or missing from the fetched row.
    #[error("row {row}, column {column}: required {expected} value is missing")]
    MissingValue {
        row: u32,
        column: u32,
        expected: FieldKind,
    },
}

/// Opaque failure reported by the remote transport collaborator.
///
/// Covers network, auth, quota, and service-side validation failures.
/// The session never inspects or retries these; they surface to the
/// caller unchanged inside [`SessionError::Remote`].
#[derive(Debug, Error)]
#[error("remote service failure: {0}")]
pub struct TransportError(pub Box<dyn std::error::Error + Send + Sync>);

impl TransportError {
    /// Wraps any error value (or message string) from the transport.
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(source.into())
    }
}

/// Error raised by the session facade.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No tab matched the requested name (compared case-insensitively).
    #[error("no tab named {requested:?} in spreadsheet {spreadsheet_id}")]
    TabNotFound {
        spreadsheet_id: String,
        requested: String,
    },

    /// The spreadsheet has no tabs to resolve against.
    #[error("spreadsheet {spreadsheet_id} has no tabs")]
    NoTabs { spreadsheet_id: String },

    #[error(transparent)]
    Remote(#[from] TransportError),

    #[error(transparent)]
    Coord(#[from] CoordError),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Record(#[from] RecordError),
}
