//! Record codec: typed records to cell data and back.
//!
//! Every record type stored in a tab implements [`SheetRecord`]. The two
//! directions are exact inverses for persisted fields: parsing the cells a
//! record produced yields an equal record (date fields compare by logical
//! value, not display text).

use crate::error::{FieldKind, RecordError};
use crate::model::value::{CellValue, RawValue};

/// One cell of a record, placed at its 1-based column within the tab.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedCell {
    pub column: u32,
    pub value: CellValue,
}

impl PositionedCell {
    pub fn new(column: u32, value: impl Into<CellValue>) -> Self {
        Self {
            column,
            value: value.into(),
        }
    }
}

/// Conversion capability between a record type and a row of cells.
///
/// Implementations are passed to the batch builder and the session by
/// type parameter; there is no runtime dispatch on record shape.
pub trait SheetRecord: Sized {
    /// Cell data for this record, in declared field order.
    ///
    /// `tab` names the tab the cells will land on when a request spans
    /// several tabs; it never affects the values themselves. The result
    /// is deterministic: the same record always yields the same cells in
    /// the same column order.
    fn to_cells(&self, tab: &str) -> Vec<PositionedCell>;

    /// Rebuilds a record from one fetched row of raw values.
    ///
    /// `values` may be shorter than the field list: cleared or
    /// never-written trailing cells simply do not arrive, and fields with
    /// a natural default treat them as empty. `row` is the 1-based row
    /// the values came from and becomes the record's resolved row.
    fn from_row(values: &[RawValue], row: u32) -> Result<Self, RecordError>;

    /// The record's 1-based row, once it is known to exist remotely.
    /// `None` for records that have not been persisted or read back.
    fn row(&self) -> Option<u32>;
}

/// Required text field; an empty or missing cell is an error.
pub fn required_string(values: &[RawValue], column: u32, row: u32) -> Result<String, RecordError> {
    match cell_at(values, column) {
        Some(raw) => coerce_string(raw),
        None => Err(missing(row, column, FieldKind::Text)),
    }
}

/// Text field defaulting to the empty string for a cleared cell.
pub fn optional_string(values: &[RawValue], column: u32, _row: u32) -> String {
    match cell_at(values, column) {
        Some(raw) => coerce_string(raw).unwrap_or_default(),
        None => String::new(),
    }
}

/// Required integer field.
pub fn required_i64(values: &[RawValue], column: u32, row: u32) -> Result<i64, RecordError> {
    match cell_at(values, column) {
        Some(raw) => coerce_i64(raw, row, column),
        None => Err(missing(row, column, FieldKind::Integer)),
    }
}

/// Integer field that tolerates a cleared cell.
pub fn optional_i64(values: &[RawValue], column: u32, row: u32) -> Result<Option<i64>, RecordError> {
    cell_at(values, column)
        .map(|raw| coerce_i64(raw, row, column))
        .transpose()
}

/// Required numeric field.
pub fn required_f64(values: &[RawValue], column: u32, row: u32) -> Result<f64, RecordError> {
    match cell_at(values, column) {
        Some(raw) => coerce_f64(raw, row, column, FieldKind::Number),
        None => Err(missing(row, column, FieldKind::Number)),
    }
}

/// Numeric field that tolerates a cleared cell.
pub fn optional_f64(values: &[RawValue], column: u32, row: u32) -> Result<Option<f64>, RecordError> {
    cell_at(values, column)
        .map(|raw| coerce_f64(raw, row, column, FieldKind::Number))
        .transpose()
}

/// Required boolean field.
pub fn required_bool(values: &[RawValue], column: u32, row: u32) -> Result<bool, RecordError> {
    match cell_at(values, column) {
        Some(raw) => coerce_bool(raw, row, column),
        None => Err(missing(row, column, FieldKind::Bool)),
    }
}

/// Boolean field that tolerates a cleared cell.
pub fn optional_bool(
    values: &[RawValue],
    column: u32,
    row: u32,
) -> Result<Option<bool>, RecordError> {
    cell_at(values, column)
        .map(|raw| coerce_bool(raw, row, column))
        .transpose()
}

/// Required date field, read as a serial number.
pub fn required_date_serial(values: &[RawValue], column: u32, row: u32) -> Result<f64, RecordError> {
    match cell_at(values, column) {
        Some(raw) => coerce_f64(raw, row, column, FieldKind::DateSerial),
        None => Err(missing(row, column, FieldKind::DateSerial)),
    }
}

/// Date field that tolerates a cleared cell.
pub fn optional_date_serial(
    values: &[RawValue],
    column: u32,
    row: u32,
) -> Result<Option<f64>, RecordError> {
    cell_at(values, column)
        .map(|raw| coerce_f64(raw, row, column, FieldKind::DateSerial))
        .transpose()
}

/// Looks up the raw value for a 1-based column, treating nulls and empty
/// strings as absent (a cleared cell reads the same as one never written).
fn cell_at(values: &[RawValue], column: u32) -> Option<&RawValue> {
    let index = column.checked_sub(1)? as usize;
    values.get(index).filter(|raw| !is_blank(raw))
}

fn is_blank(raw: &RawValue) -> bool {
    match raw {
        RawValue::Null => true,
        RawValue::String(s) => s.is_empty(),
        _ => false,
    }
}

fn missing(row: u32, column: u32, expected: FieldKind) -> RecordError {
    RecordError::MissingValue {
        row,
        column,
        expected,
    }
}

fn mismatch(raw: &RawValue, row: u32, column: u32, expected: FieldKind) -> RecordError {
    RecordError::TypeMismatch {
        row,
        column,
        expected,
        found: describe(raw),
    }
}

/// Any scalar renders as text, so string coercion only fails on nested
/// JSON, which a value grid never contains.
fn coerce_string(raw: &RawValue) -> Result<String, RecordError> {
    match raw {
        RawValue::String(s) => Ok(s.clone()),
        RawValue::Number(n) => Ok(n.to_string()),
        RawValue::Bool(b) => Ok(b.to_string()),
        other => Ok(other.to_string()),
    }
}

fn coerce_i64(raw: &RawValue, row: u32, column: u32) -> Result<i64, RecordError> {
    match raw {
        RawValue::Number(n) => {
            if let Some(v) = n.as_i64() {
                return Ok(v);
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
                    Ok(f as i64)
                }
                _ => Err(mismatch(raw, row, column, FieldKind::Integer)),
            }
        }
        RawValue::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| mismatch(raw, row, column, FieldKind::Integer)),
        _ => Err(mismatch(raw, row, column, FieldKind::Integer)),
    }
}

fn coerce_f64(raw: &RawValue, row: u32, column: u32, expected: FieldKind) -> Result<f64, RecordError> {
    match raw {
        RawValue::Number(n) => n
            .as_f64()
            .ok_or_else(|| mismatch(raw, row, column, expected)),
        RawValue::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| mismatch(raw, row, column, expected)),
        _ => Err(mismatch(raw, row, column, expected)),
    }
}

fn coerce_bool(raw: &RawValue, row: u32, column: u32) -> Result<bool, RecordError> {
    match raw {
        RawValue::Bool(b) => Ok(*b),
        RawValue::String(s) if s.eq_ignore_ascii_case("true") => Ok(true),
        RawValue::String(s) if s.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(mismatch(raw, row, column, FieldKind::Bool)),
    }
}

fn describe(raw: &RawValue) -> String {
    match raw {
        RawValue::Null => "empty cell".to_string(),
        RawValue::Bool(b) => format!("boolean {}", b),
        RawValue::Number(n) => format!("number {}", n),
        RawValue::String(s) => format!("string {:?}", s),
        _ => "nested value".to_string(),
    }
}
