//! Rectangular ranges on a tab, addressed in A1 notation.
//!
//! A [`SheetRange`] is immutable once constructed. Bounds are 1-based and
//! inclusive; a missing bound means "to the edge of the data" on that
//! side. Construction and parsing validate everything up front, so a
//! range that exists is always translatable to service coordinates.

use std::fmt;

use crate::error::{Axis, CoordError, RangeError};
use crate::model::coord::{column_to_letters, letters_to_column};

/// A rectangular region of a tab.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SheetRange {
    tab: String,
    start_row: Option<u32>,
    start_col: Option<u32>,
    end_row: Option<u32>,
    end_col: Option<u32>,
}

impl SheetRange {
    /// A single cell.
    pub fn cell(tab: impl Into<String>, row: u32, col: u32) -> Result<Self, CoordError> {
        Self::bounded(tab, row, col, row, col)
    }

    /// A fully bounded rectangle.
    pub fn bounded(
        tab: impl Into<String>,
        start_row: u32,
        start_col: u32,
        end_row: u32,
        end_col: u32,
    ) -> Result<Self, CoordError> {
        check_index(start_row, Axis::Row)?;
        check_index(start_col, Axis::Column)?;
        check_order(start_row, end_row, Axis::Row)?;
        check_order(start_col, end_col, Axis::Column)?;
        Ok(Self {
            tab: tab.into(),
            start_row: Some(start_row),
            start_col: Some(start_col),
            end_row: Some(end_row),
            end_col: Some(end_col),
        })
    }

    /// Whole columns, rows open on both ends (`A:C`).
    pub fn columns(
        tab: impl Into<String>,
        start_col: u32,
        end_col: u32,
    ) -> Result<Self, CoordError> {
        check_index(start_col, Axis::Column)?;
        check_order(start_col, end_col, Axis::Column)?;
        Ok(Self {
            tab: tab.into(),
            start_row: None,
            start_col: Some(start_col),
            end_row: None,
            end_col: Some(end_col),
        })
    }

    /// Bounded columns from `start_row` down to the edge of the data
    /// (`A2:C`).
    pub fn open_bottom(
        tab: impl Into<String>,
        start_row: u32,
        start_col: u32,
        end_col: u32,
    ) -> Result<Self, CoordError> {
        check_index(start_row, Axis::Row)?;
        check_index(start_col, Axis::Column)?;
        check_order(start_col, end_col, Axis::Column)?;
        Ok(Self {
            tab: tab.into(),
            start_row: Some(start_row),
            start_col: Some(start_col),
            end_row: None,
            end_col: Some(end_col),
        })
    }

    /// Everything on the tab.
    pub fn whole_tab(tab: impl Into<String>) -> Self {
        Self {
            tab: tab.into(),
            start_row: None,
            start_col: None,
            end_row: None,
            end_col: None,
        }
    }

    /// Parses A1-style notation.
    ///
    /// Accepted forms: `Sheet1!B2:C5`, `'My Tab'!A:C`, `Sheet1!B2`,
    /// `Sheet1!A2:C`, and a bare tab name for the whole tab. Quoted tab
    /// names escape embedded quotes by doubling (`'It''s'!A1`).
    pub fn parse(input: &str) -> Result<Self, RangeError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(RangeError::Empty);
        }

        let (tab, cells) = if let Some(rest) = input.strip_prefix('\'') {
            let (tab, cells) = split_quoted_tab(input, rest)?;
            match cells {
                Some(cells) => (tab, cells),
                None => return Ok(Self::whole_tab(tab)),
            }
        } else if let Some((tab, cells)) = input.split_once('!') {
            if tab.is_empty() {
                return Err(RangeError::Malformed {
                    input: input.to_string(),
                });
            }
            (tab.to_string(), cells)
        } else {
            // No separator: the whole input is a tab name.
            return Ok(Self::whole_tab(input));
        };

        if cells.is_empty() {
            return Err(RangeError::Malformed {
                input: input.to_string(),
            });
        }

        let endpoints: Vec<&str> = cells.split(':').collect();
        let (start, end) = match endpoints.as_slice() {
            [single] => {
                let endpoint = parse_endpoint(single)?;
                (endpoint, endpoint)
            }
            [first, second] => (parse_endpoint(first)?, parse_endpoint(second)?),
            _ => {
                return Err(RangeError::TooManyEndpoints {
                    input: input.to_string(),
                });
            }
        };

        if start.0 > end.0 {
            return Err(CoordError::StartPastEnd {
                axis: Axis::Column,
                start: start.0,
                end: end.0,
            }
            .into());
        }
        if let (Some(start_row), Some(end_row)) = (start.1, end.1) {
            if start_row > end_row {
                return Err(CoordError::StartPastEnd {
                    axis: Axis::Row,
                    start: start_row,
                    end: end_row,
                }
                .into());
            }
        }

        Ok(Self {
            tab,
            start_row: start.1,
            start_col: Some(start.0),
            end_row: end.1,
            end_col: Some(end.0),
        })
    }

    /// The tab this range targets; empty when the range is tab-relative.
    pub fn tab(&self) -> &str {
        &self.tab
    }

    pub fn start_row(&self) -> Option<u32> {
        self.start_row
    }

    pub fn start_col(&self) -> Option<u32> {
        self.start_col
    }

    pub fn end_row(&self) -> Option<u32> {
        self.end_row
    }

    pub fn end_col(&self) -> Option<u32> {
        self.end_col
    }

    /// True when the range addresses exactly one cell.
    pub fn is_single_cell(&self) -> bool {
        self.start_row.is_some()
            && self.start_row == self.end_row
            && self.start_col.is_some()
            && self.start_col == self.end_col
    }

    /// A copy of this range with `tab` filled in if the range is
    /// tab-relative; a range that already names a tab is returned as-is.
    pub fn on_tab(&self, tab: impl Into<String>) -> SheetRange {
        let mut range = self.clone();
        if range.tab.is_empty() {
            range.tab = tab.into();
        }
        range
    }

    /// Canonical A1 notation for this range.
    pub fn a1_notation(&self) -> String {
        let cells = self.cells_notation();
        if self.tab.is_empty() {
            return cells;
        }
        let tab = quote_tab(&self.tab);
        if cells.is_empty() {
            tab
        } else {
            format!("{}!{}", tab, cells)
        }
    }

    fn cells_notation(&self) -> String {
        let Some(start_col) = self.start_col else {
            return String::new();
        };
        let mut out = endpoint_notation(start_col, self.start_row);
        if !self.is_single_cell() {
            if let Some(end_col) = self.end_col {
                out.push(':');
                out.push_str(&endpoint_notation(end_col, self.end_row));
            }
        }
        out
    }
}

impl fmt::Display for SheetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.a1_notation())
    }
}

fn check_index(index: u32, axis: Axis) -> Result<(), CoordError> {
    if index < 1 {
        return Err(CoordError::Invalid { axis, index });
    }
    Ok(())
}

fn check_order(start: u32, end: u32, axis: Axis) -> Result<(), CoordError> {
    if start > end {
        return Err(CoordError::StartPastEnd { axis, start, end });
    }
    Ok(())
}

fn endpoint_notation(col: u32, row: Option<u32>) -> String {
    // Columns here come from validated ranges, so letter conversion
    // cannot fail.
    let mut out = column_to_letters(col).unwrap_or_default();
    if let Some(row) = row {
        out.push_str(&row.to_string());
    }
    out
}

/// Parses one endpoint (`C5`, `C`) into a column and optional row.
fn parse_endpoint(endpoint: &str) -> Result<(u32, Option<u32>), RangeError> {
    let letter_count = endpoint
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .count();
    if letter_count == 0 {
        return Err(RangeError::MissingColumns {
            endpoint: endpoint.to_string(),
        });
    }
    let (letters, digits) = endpoint.split_at(letter_count);
    let col = letters_to_column(letters)?;
    let row = if digits.is_empty() {
        None
    } else {
        match digits.parse::<u32>() {
            Ok(row) if row >= 1 => Some(row),
            _ => {
                return Err(RangeError::InvalidRowNumber {
                    found: digits.to_string(),
                });
            }
        }
    };
    Ok((col, row))
}

/// Splits a `'Quoted tab'!rest` prefix. `rest` is `input` without the
/// opening quote. Returns `None` for the cell part when the notation is
/// a bare quoted tab name.
fn split_quoted_tab<'a>(
    input: &str,
    rest: &'a str,
) -> Result<(String, Option<&'a str>), RangeError> {
    let malformed = || RangeError::Malformed {
        input: input.to_string(),
    };
    let mut tab = String::new();
    let mut chars = rest.char_indices();
    while let Some((i, c)) = chars.next() {
        if c != '\'' {
            tab.push(c);
            continue;
        }
        if rest[i + 1..].starts_with('\'') {
            // Doubled quote: literal quote inside the name.
            tab.push('\'');
            chars.next();
            continue;
        }
        let after = &rest[i + 1..];
        return match after.strip_prefix('!') {
            Some(cells) => Ok((tab, Some(cells))),
            None if after.is_empty() => Ok((tab, None)),
            None => Err(malformed()),
        };
    }
    Err(malformed())
}

fn quote_tab(tab: &str) -> String {
    let plain = !tab.is_empty()
        && tab
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        tab.to_string()
    } else {
        format!("'{}'", tab.replace('\'', "''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bounded() {
        let range = SheetRange::parse("Sheet1!B2:C5").unwrap();
        assert_eq!(range.tab(), "Sheet1");
        assert_eq!(range.start_row(), Some(2));
        assert_eq!(range.start_col(), Some(2));
        assert_eq!(range.end_row(), Some(5));
        assert_eq!(range.end_col(), Some(3));
        assert_eq!(range.a1_notation(), "Sheet1!B2:C5");
    }

    #[test]
    fn test_parse_single_cell() {
        let range = SheetRange::parse("Sheet1!B2").unwrap();
        assert!(range.is_single_cell());
        assert_eq!(range.a1_notation(), "Sheet1!B2");
    }

    #[test]
    fn test_parse_columns_only() {
        let range = SheetRange::parse("Data!A:C").unwrap();
        assert_eq!(range.start_row(), None);
        assert_eq!(range.end_row(), None);
        assert_eq!(range.start_col(), Some(1));
        assert_eq!(range.end_col(), Some(3));
        assert_eq!(range.a1_notation(), "Data!A:C");
    }

    #[test]
    fn test_parse_open_bottom() {
        let range = SheetRange::parse("Data!A2:C").unwrap();
        assert_eq!(range.start_row(), Some(2));
        assert_eq!(range.end_row(), None);
        assert_eq!(range.a1_notation(), "Data!A2:C");
    }

    #[test]
    fn test_parse_bare_tab() {
        let range = SheetRange::parse("Contacts").unwrap();
        assert_eq!(range.tab(), "Contacts");
        assert_eq!(range.start_col(), None);
        assert_eq!(range.a1_notation(), "Contacts");
    }

    #[test]
    fn test_parse_quoted_tab() {
        let range = SheetRange::parse("'My Tab'!A1:B2").unwrap();
        assert_eq!(range.tab(), "My Tab");
        assert_eq!(range.a1_notation(), "'My Tab'!A1:B2");

        let escaped = SheetRange::parse("'It''s here'!A1").unwrap();
        assert_eq!(escaped.tab(), "It's here");
        assert_eq!(escaped.a1_notation(), "'It''s here'!A1");

        let bare = SheetRange::parse("'My Tab'").unwrap();
        assert_eq!(bare.tab(), "My Tab");
        assert_eq!(bare.start_col(), None);
    }

    #[test]
    fn test_parse_rejects_bad_notation() {
        assert_eq!(SheetRange::parse(""), Err(RangeError::Empty));
        assert!(matches!(
            SheetRange::parse("Sheet1!2:5"),
            Err(RangeError::MissingColumns { .. })
        ));
        assert!(matches!(
            SheetRange::parse("Sheet1!A0"),
            Err(RangeError::InvalidRowNumber { .. })
        ));
        assert!(matches!(
            SheetRange::parse("Sheet1!A1:B2:C3"),
            Err(RangeError::TooManyEndpoints { .. })
        ));
        assert!(matches!(
            SheetRange::parse("!A1"),
            Err(RangeError::Malformed { .. })
        ));
        assert!(matches!(
            SheetRange::parse("Sheet1!"),
            Err(RangeError::Malformed { .. })
        ));
        assert!(matches!(
            SheetRange::parse("'Unterminated!A1"),
            Err(RangeError::Malformed { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_disorder() {
        assert!(matches!(
            SheetRange::parse("Sheet1!C5:B2"),
            Err(RangeError::Coord(CoordError::StartPastEnd {
                axis: Axis::Column,
                ..
            }))
        ));
        assert!(matches!(
            SheetRange::parse("Sheet1!B5:C2"),
            Err(RangeError::Coord(CoordError::StartPastEnd {
                axis: Axis::Row,
                ..
            }))
        ));
    }

    #[test]
    fn test_constructors_validate() {
        assert!(SheetRange::cell("T", 0, 1).is_err());
        assert!(SheetRange::bounded("T", 2, 1, 1, 1).is_err());
        assert!(SheetRange::columns("T", 3, 2).is_err());
        let cell = SheetRange::cell("T", 2, 3).unwrap();
        assert_eq!(cell.a1_notation(), "T!C2");
    }

    #[test]
    fn test_on_tab_fills_only_missing() {
        let relative = SheetRange::bounded("", 1, 1, 2, 2).unwrap();
        assert_eq!(relative.on_tab("Data").a1_notation(), "Data!A1:B2");

        let absolute = SheetRange::bounded("Kept", 1, 1, 2, 2).unwrap();
        assert_eq!(absolute.on_tab("Data").a1_notation(), "Kept!A1:B2");
    }

    #[test]
    fn test_single_column_renders_as_pair() {
        let range = SheetRange::parse("T!D").unwrap();
        assert_eq!(range.a1_notation(), "T!D:D");
    }
}
