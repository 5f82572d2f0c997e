//! Persistence implementations
//!
//! File-based implementations of the repository traits.

mod file_lookup_store;
mod file_record_log;

pub use file_lookup_store::FileLookupStore;
pub use file_record_log::FileRecordLog;
