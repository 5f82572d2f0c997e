//! Domain model types

pub mod document;
pub mod field_set;
pub mod layout;
pub mod log_entry;
pub mod lookup_list;
pub mod record;
pub mod supplier;

pub use document::{Document, DocumentRow, DOCUMENT_TITLE, SIGNATURE_LINES};
pub use field_set::FieldSet;
pub use layout::{FieldSpec, FormLayout};
pub use log_entry::{LogEntry, LOG_HEADER, LOG_TIMESTAMP_FORMAT};
pub use lookup_list::LookupList;
pub use record::DeliveryRecord;
pub use supplier::SupplierHeader;
