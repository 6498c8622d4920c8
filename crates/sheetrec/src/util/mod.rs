//! Utility modules for sheetrec.

pub mod serial;

pub use serial::{SerialDateError, serial_from_ymd, ymd_from_serial};
