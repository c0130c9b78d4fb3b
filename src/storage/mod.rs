//! Storage layer for teller-cli
//!
//! Persists the single account as a fixed three-line text record with an
//! atomic overwrite on save.

pub mod file_io;
pub mod record;

pub use file_io::{load_record, save_record};
pub use record::{AccountRecord, RecordParseError};
