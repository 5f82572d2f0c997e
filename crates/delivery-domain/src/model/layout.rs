//! Ordered form layout: which fields appear, under which label, and
//! whether they keep a lookup history

use std::collections::HashSet;

use delivery_types::{FieldName, LayoutError};
use serde::{Deserialize, Serialize};

/// One row of the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub field: FieldName,
    pub label: String,
    pub lookup: bool,
}

impl FieldSpec {
    pub fn new(field: FieldName, label: impl Into<String>, lookup: bool) -> Self {
        Self {
            field,
            label: label.into(),
            lookup,
        }
    }
}

impl From<FieldName> for FieldSpec {
    fn from(field: FieldName) -> Self {
        Self::new(field, field.label(), field.is_lookup())
    }
}

/// Fields of a delivery note in print order. Every listed field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormLayout {
    fields: Vec<FieldSpec>,
}

impl FormLayout {
    /// Build a layout; rejects empty layouts and repeated fields
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, LayoutError> {
        if fields.is_empty() {
            return Err(LayoutError::Empty);
        }
        let mut seen = HashSet::new();
        for spec in &fields {
            if !seen.insert(spec.field) {
                return Err(LayoutError::Duplicate(spec.field));
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Required fields in print order
    pub fn required(&self) -> Vec<FieldName> {
        self.fields.iter().map(|s| s.field).collect()
    }

    /// Fields backed by a lookup list, in print order
    pub fn lookup_fields(&self) -> Vec<FieldName> {
        self.fields
            .iter()
            .filter(|s| s.lookup)
            .map(|s| s.field)
            .collect()
    }

    pub fn spec(&self, field: FieldName) -> Option<&FieldSpec> {
        self.fields.iter().find(|s| s.field == field)
    }
}

impl Default for FormLayout {
    /// All twelve fields with their standard labels
    fn default() -> Self {
        Self {
            fields: FieldName::ALL.into_iter().map(FieldSpec::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = FormLayout::default();
        assert_eq!(layout.fields().len(), 12);
        assert_eq!(layout.required()[0], FieldName::Customer);
        assert_eq!(layout.lookup_fields(), FieldName::LOOKUP.to_vec());
        assert_eq!(layout.spec(FieldName::Address).unwrap().label, "Delivery Address");
    }

    #[test]
    fn test_rejects_empty_layout() {
        assert!(matches!(FormLayout::new(vec![]), Err(LayoutError::Empty)));
    }

    #[test]
    fn test_rejects_duplicate_field() {
        let result = FormLayout::new(vec![
            FieldName::Customer.into(),
            FieldSpec::new(FieldName::Customer, "Buyer", false),
        ]);
        assert!(matches!(result, Err(LayoutError::Duplicate(FieldName::Customer))));
    }

    #[test]
    fn test_custom_order_is_kept() {
        let layout = FormLayout::new(vec![
            FieldSpec::new(FieldName::Product, "Product", true),
            FieldSpec::new(FieldName::Customer, "Customer Name", true),
            FieldSpec::new(FieldName::Quantity, "Quantity", false),
        ])
        .unwrap();
        assert_eq!(
            layout.required(),
            vec![FieldName::Product, FieldName::Customer, FieldName::Quantity]
        );
        assert!(layout.spec(FieldName::Driver).is_none());
    }
}
