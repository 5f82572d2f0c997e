//! Renderer-agnostic printable delivery note

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::SupplierHeader;

pub const DOCUMENT_TITLE: &str = "Delivery Note";

/// Signature lines printed under the field list
pub const SIGNATURE_LINES: [&str; 2] = ["Transporter Signature", "Supplier Signature"];

/// One `label: value` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRow {
    pub label: String,
    pub value: String,
}

/// A delivery note ready to hand to a renderer or printer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub header: SupplierHeader,
    pub title: String,
    pub issued_at: NaiveDateTime,
    pub rows: Vec<DocumentRow>,
    pub signatures: Vec<String>,
}

impl Document {
    /// Value of the row with `label`
    pub fn row(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value.as_str())
    }

    /// Equal apart from the issue time
    pub fn same_content(&self, other: &Document) -> bool {
        self.header == other.header
            && self.title == other.title
            && self.rows == other.rows
            && self.signatures == other.signatures
    }
}

impl fmt::Display for DocumentRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Plain-text page: centred header, title, field list, signatures
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width: usize = 64;
        let label_width = self
            .rows
            .iter()
            .map(|r| r.label.chars().count() + 1)
            .max()
            .unwrap_or(0);

        writeln!(f, "{:^width$}", self.header.name)?;
        writeln!(f, "{:^width$}", self.header.address)?;
        writeln!(f, "{:^width$}", self.header.contact_line())?;
        writeln!(f)?;
        writeln!(f, "{:^width$}", self.title)?;
        writeln!(f, "{:^width$}", self.issued_at.format("%Y-%m-%d %H:%M").to_string())?;
        writeln!(f)?;
        for row in &self.rows {
            let label = format!("{}:", row.label);
            writeln!(f, "{:<label_width$}  {}", label, row.value)?;
        }
        writeln!(f)?;
        writeln!(f, "Signatures:")?;
        for signature in &self.signatures {
            writeln!(f, "{}: ___________________", signature)?;
        }
        Ok(())
    }
}
