//! Domain services

pub mod lookups;
pub mod record_formatter;

pub use lookups::{load_lookups, remember};
pub use record_formatter::RecordFormatter;
