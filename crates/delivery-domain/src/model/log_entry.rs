//! One row of the delivery history log

use chrono::NaiveDateTime;
use delivery_types::FieldName;
use serde::{Deserialize, Serialize};

use super::DeliveryRecord;

/// Column names of the history log, in file order
pub const LOG_HEADER: [&str; 6] = ["Date", "Customer", "Address", "Product", "Quantity", "Type"];

/// Timestamp format of the `Date` column
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Summary of a finalized record as kept in the history log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: NaiveDateTime,
    pub customer: String,
    pub address: String,
    pub product: String,
    pub quantity: String,
    /// Unit of the quantity (bag, ton, ...)
    pub unit: String,
}

impl LogEntry {
    /// `Date` column text
    pub fn date_text(&self) -> String {
        self.date.format(LOG_TIMESTAMP_FORMAT).to_string()
    }

    /// Values in [`LOG_HEADER`] order
    pub fn to_row(&self) -> [String; 6] {
        [
            self.date_text(),
            self.customer.clone(),
            self.address.clone(),
            self.product.clone(),
            self.quantity.clone(),
            self.unit.clone(),
        ]
    }
}

impl From<&DeliveryRecord> for LogEntry {
    fn from(record: &DeliveryRecord) -> Self {
        let fields = record.fields();
        Self {
            date: record.created_at(),
            customer: fields.get(FieldName::Customer).to_string(),
            address: fields.get(FieldName::Address).to_string(),
            product: fields.get(FieldName::Product).to_string(),
            quantity: fields.get(FieldName::Quantity).to_string(),
            unit: fields.get(FieldName::Type).to_string(),
        }
    }
}
