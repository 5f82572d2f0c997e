//! Supplier header printed at the top of every delivery note

use serde::{Deserialize, Serialize};

/// Fixed supplier details, passed explicitly to the formatter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierHeader {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl SupplierHeader {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// `Phone: ... | Email: ...`
    pub fn contact_line(&self) -> String {
        format!("Phone: {} | Email: {}", self.phone, self.email)
    }
}

impl Default for SupplierHeader {
    fn default() -> Self {
        Self::new(
            "Simuka Upenye Pvt Ltd",
            "Rippling Waters Farm, Macheke",
            "078 519 5945",
            "jcwattson@yahoo.com",
        )
    }
}
