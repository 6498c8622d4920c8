//! Cell value types.
//!
//! A [`CellValue`] is the logical content of one cell, independent of how
//! the service displays it. Writing a value and reading it back preserves
//! the logical type and content; display formatting is not part of the
//! contract.

use crate::util::serial::{SerialDateError, serial_from_ymd};

/// Raw, untyped cell content as the remote service returns it.
pub type RawValue = serde_json::Value;

/// The logical content of a single cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// No content.
    #[default]
    Empty,

    /// UTF-8 text.
    Text(String),

    /// Numeric content. The grid has a single numeric type; integers are
    /// whole-valued doubles.
    Number(f64),

    /// Boolean content.
    Bool(bool),

    /// A calendar date as a serial number: whole days since 1899-12-30,
    /// with the fractional part carrying time of day. Written with a date
    /// format so the cell displays as a date.
    DateSerial(f64),
}

impl CellValue {
    /// Builds a date value from a civil calendar date (midnight).
    pub fn date(year: i32, month: u32, day: u32) -> Result<Self, SerialDateError> {
        Ok(CellValue::DateSerial(serial_from_ymd(year, month, day)?))
    }

    /// True for [`CellValue::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Interprets a raw service value as a logical cell value.
    ///
    /// Raw reads carry no formatting, so serial-number dates arrive as
    /// plain numbers here; field helpers that expect a date reinterpret
    /// them. Empty strings mean a cleared cell.
    pub fn from_raw(raw: &RawValue) -> CellValue {
        match raw {
            RawValue::Null => CellValue::Empty,
            RawValue::Bool(b) => CellValue::Bool(*b),
            RawValue::Number(n) => match n.as_f64() {
                Some(v) => CellValue::Number(v),
                None => CellValue::Empty,
            },
            RawValue::String(s) if s.is_empty() => CellValue::Empty,
            RawValue::String(s) => CellValue::Text(s.clone()),
            // Arrays and objects never appear in a value grid; keep the
            // JSON text rather than losing the cell.
            other => CellValue::Text(other.to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_raw_scalars() {
        assert_eq!(CellValue::from_raw(&json!(null)), CellValue::Empty);
        assert_eq!(CellValue::from_raw(&json!("")), CellValue::Empty);
        assert_eq!(
            CellValue::from_raw(&json!("hello")),
            CellValue::Text("hello".to_string())
        );
        assert_eq!(CellValue::from_raw(&json!(42)), CellValue::Number(42.0));
        assert_eq!(CellValue::from_raw(&json!(2.5)), CellValue::Number(2.5));
        assert_eq!(CellValue::from_raw(&json!(true)), CellValue::Bool(true));
    }

    #[test]
    fn test_date_constructor() {
        assert_eq!(
            CellValue::date(1970, 1, 1).unwrap(),
            CellValue::DateSerial(25_569.0)
        );
        assert!(CellValue::date(2023, 2, 29).is_err());
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(CellValue::from("x"), CellValue::Text("x".to_string()));
        assert_eq!(CellValue::from(7i64), CellValue::Number(7.0));
        assert_eq!(CellValue::from(false), CellValue::Bool(false));
        assert!(CellValue::default().is_empty());
    }
}
