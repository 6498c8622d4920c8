//! Session facade over the remote spreadsheet service.
//!
//! A [`SheetSession`] resolves its target tab exactly once, then submits
//! pre-built batches and range reads through a [`SheetsTransport`]. Every
//! facade method issues at most one remote call and never retries; remote
//! failures surface to the caller unchanged. The session holds no state
//! beyond the read-only [`SheetIdentity`], so concurrent calls are as
//! safe as the transport makes them.

use crate::codec::{self, wire};
use crate::error::{SessionError, TransportError};
use crate::model::builder::BatchBuilder;
use crate::model::edit::BatchRequest;
use crate::model::range::SheetRange;
use crate::model::record::SheetRecord;
use crate::model::value::{CellValue, RawValue};

/// The remote collaborator boundary.
///
/// Implementations own all I/O concerns: connection handling, retries,
/// timeouts, and credentials. The session calls each method at most once
/// per logical operation and treats every error as opaque.
pub trait SheetsTransport {
    /// Lists the tabs of a spreadsheet. Called once, at session init.
    fn list_tabs(&self, spreadsheet_id: &str)
    -> Result<Vec<wire::SheetProperties>, TransportError>;

    /// Applies an ordered batch of edits as one atomic transaction.
    fn submit_batch(
        &self,
        spreadsheet_id: &str,
        request: &wire::BatchUpdateRequest,
    ) -> Result<wire::BatchUpdateResponse, TransportError>;

    /// Reads raw, unformatted values for an A1-style range. Date cells
    /// must arrive as serial numbers, not formatted strings; record
    /// parsing depends on that rendering.
    fn read_range(&self, spreadsheet_id: &str, range: &str)
    -> Result<wire::ValueRange, TransportError>;
}

/// The resolved target of a session: spreadsheet, tab title, and the
/// tab's numeric id. Immutable for the session's lifetime; targeting a
/// different tab means connecting a new session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetIdentity {
    pub spreadsheet_id: String,
    pub tab_title: String,
    pub sheet_id: i64,
}

/// A connected view of one tab of one spreadsheet.
#[derive(Debug)]
pub struct SheetSession<T> {
    transport: T,
    identity: SheetIdentity,
}

impl<T: SheetsTransport> SheetSession<T> {
    /// Resolves the target tab and returns the connected session.
    ///
    /// `tab` is matched case-insensitively against tab titles; `None`
    /// picks the first tab. Resolution happens exactly once, here.
    pub fn connect(
        transport: T,
        spreadsheet_id: impl Into<String>,
        tab: Option<&str>,
    ) -> Result<Self, SessionError> {
        let spreadsheet_id = spreadsheet_id.into();
        let tabs = transport.list_tabs(&spreadsheet_id)?;
        let resolved = match tab {
            Some(requested) => {
                let want = requested.to_lowercase();
                tabs.into_iter()
                    .find(|props| props.title.to_lowercase() == want)
                    .ok_or_else(|| SessionError::TabNotFound {
                        spreadsheet_id: spreadsheet_id.clone(),
                        requested: requested.to_string(),
                    })?
            }
            None => tabs
                .into_iter()
                .next()
                .ok_or_else(|| SessionError::NoTabs {
                    spreadsheet_id: spreadsheet_id.clone(),
                })?,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(tab = %resolved.title, sheet_id = resolved.sheet_id, "resolved target tab");

        Ok(Self {
            transport,
            identity: SheetIdentity {
                spreadsheet_id,
                tab_title: resolved.title,
                sheet_id: resolved.sheet_id,
            },
        })
    }

    /// The identity resolved at connect time.
    pub fn identity(&self) -> &SheetIdentity {
        &self.identity
    }

    /// An empty batch builder targeting this session's tab.
    pub fn builder(&self) -> BatchBuilder {
        BatchBuilder::new(self.identity.tab_title.as_str())
    }

    /// Encodes and submits a pre-built batch in one remote call.
    pub fn submit(&self, batch: BatchRequest) -> Result<wire::BatchUpdateResponse, SessionError> {
        let encoded = codec::encode_batch(&batch, self.identity.sheet_id)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(edits = batch.len(), "submitting batch");
        Ok(self
            .transport
            .submit_batch(&self.identity.spreadsheet_id, &encoded)?)
    }

    /// Appends one record after the last existing row.
    pub fn append_record<R: SheetRecord>(&self, record: &R) -> Result<(), SessionError> {
        self.append_records(std::slice::from_ref(record))
    }

    /// Appends `records` in order after the last existing row.
    ///
    /// Row numbers are decided remotely and not read back; the records
    /// are left untouched.
    pub fn append_records<R: SheetRecord>(&self, records: &[R]) -> Result<(), SessionError> {
        self.submit(self.builder().append_records(records).build())?;
        Ok(())
    }

    /// Deletes the given 1-based row.
    pub fn delete_row(&self, row: u32) -> Result<(), SessionError> {
        self.submit(self.builder().delete_row(row)?.build())?;
        Ok(())
    }

    /// Overwrites cells, one `(range, value)` pair per edit, in order.
    pub fn update_cells(
        &self,
        edits: impl IntoIterator<Item = (SheetRange, CellValue)>,
    ) -> Result<(), SessionError> {
        self.submit(self.builder().update_cells(edits).build())?;
        Ok(())
    }

    /// Overwrites every field cell of `record` at its resolved row.
    pub fn update_record<R: SheetRecord>(&self, record: &R) -> Result<(), SessionError> {
        self.submit(self.builder().update_record(record)?.build())?;
        Ok(())
    }

    /// Reads raw rows for a range. A tab-relative range is read against
    /// this session's tab.
    pub fn read_rows(&self, range: &SheetRange) -> Result<Vec<Vec<RawValue>>, SessionError> {
        let notation = range
            .on_tab(self.identity.tab_title.as_str())
            .a1_notation();
        #[cfg(feature = "tracing")]
        tracing::debug!(range = %notation, "reading range");
        let response = self
            .transport
            .read_range(&self.identity.spreadsheet_id, &notation)?;
        Ok(response.values)
    }

    /// Reads a range and parses every returned row into a record.
    ///
    /// Row numbers are assigned from the range's start row (row 1 when
    /// the range is open at the top), in returned order.
    pub fn read_records<R: SheetRecord>(&self, range: &SheetRange) -> Result<Vec<R>, SessionError> {
        let first_row = range.start_row().unwrap_or(1);
        let rows = self.read_rows(range)?;
        let mut records = Vec::with_capacity(rows.len());
        for (offset, row) in rows.iter().enumerate() {
            let row_number = first_row + offset as u32;
            records.push(R::from_row(row, row_number)?);
        }
        Ok(records)
    }
}
