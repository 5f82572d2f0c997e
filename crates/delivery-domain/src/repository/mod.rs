//! Repository trait definitions for data persistence

use delivery_types::{FieldName, Result};

use crate::model::{DeliveryRecord, LogEntry, LookupList};

/// Persisted lookup lists, one per categorical field
pub trait LookupRepository {
    /// All stored values of `field` in insertion order; empty when nothing
    /// has been stored yet
    fn load_all(&self, field: FieldName) -> Result<Vec<String>>;

    /// Store `value` unless it is empty or already present.
    /// Returns whether a value was inserted.
    fn upsert_if_new(&self, field: FieldName, value: &str) -> Result<bool>;

    /// Stored values as a [`LookupList`]
    fn load_list(&self, field: FieldName) -> Result<LookupList> {
        Ok(LookupList::from_values(field, self.load_all(field)?))
    }
}

/// Append-only history of finalized records
pub trait RecordLogRepository {
    /// Append one record
    fn append(&self, record: &DeliveryRecord) -> Result<()>;

    /// All entries in file order
    fn read_all(&self) -> Result<Vec<LogEntry>>;
}
