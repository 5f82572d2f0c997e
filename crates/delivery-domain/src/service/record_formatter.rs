//! Turns completed form values into a printable [`Document`]

use chrono::{Local, NaiveDateTime};
use delivery_types::{Error, Result};

use crate::model::{
    DeliveryRecord, Document, DocumentRow, FieldSet, FormLayout, SupplierHeader, DOCUMENT_TITLE,
    SIGNATURE_LINES,
};

/// Renders delivery notes for one supplier and form layout
#[derive(Debug, Clone)]
pub struct RecordFormatter {
    header: SupplierHeader,
    layout: FormLayout,
}

impl RecordFormatter {
    pub fn new(header: SupplierHeader, layout: FormLayout) -> Self {
        Self { header, layout }
    }

    pub fn layout(&self) -> &FormLayout {
        &self.layout
    }

    /// Render `fields` stamped with the current local time
    pub fn render(&self, fields: &FieldSet) -> Result<Document> {
        self.render_at(fields, Local::now().naive_local())
    }

    /// Render `fields` stamped with `issued_at`.
    ///
    /// Fails with `IncompleteRecord` listing every empty layout field; no
    /// document is produced in that case.
    pub fn render_at(&self, fields: &FieldSet, issued_at: NaiveDateTime) -> Result<Document> {
        let missing = fields.missing(&self.layout.required());
        if !missing.is_empty() {
            return Err(Error::IncompleteRecord { missing });
        }

        let rows = self
            .layout
            .fields()
            .iter()
            .map(|spec| DocumentRow {
                label: spec.label.clone(),
                value: fields.get(spec.field).to_string(),
            })
            .collect();

        Ok(Document {
            header: self.header.clone(),
            title: DOCUMENT_TITLE.to_string(),
            issued_at,
            rows,
            signatures: SIGNATURE_LINES.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Render a finalized record with its own timestamp
    pub fn render_record(&self, record: &DeliveryRecord) -> Result<Document> {
        self.render_at(record.fields(), record.created_at())
    }
}
