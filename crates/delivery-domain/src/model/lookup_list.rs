//! Distinct-value history for one categorical field

use delivery_types::FieldName;
use serde::{Deserialize, Serialize};

/// Previously seen values of one field, without duplicates
///
/// Matching is exact and case-sensitive. Insertion order is kept;
/// use [`LookupList::sorted`] for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupList {
    field: FieldName,
    values: Vec<String>,
}

impl LookupList {
    pub fn new(field: FieldName) -> Self {
        Self {
            field,
            values: Vec::new(),
        }
    }

    /// Build from stored values; later duplicates and empty values are dropped
    pub fn from_values<I, S>(field: FieldName, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new(field);
        for value in values {
            list.insert(value.as_ref());
        }
        list
    }

    pub fn field(&self) -> FieldName {
        self.field
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Add a value if it is non-empty and new. Returns whether it was added.
    pub fn insert(&mut self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() || self.contains(value) {
            return false;
        }
        self.values.push(value.to_string());
        true
    }

    /// Values in insertion order
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Values in display order
    pub fn sorted(&self) -> Vec<String> {
        let mut values = self.values.clone();
        values.sort();
        values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_new_value() {
        let mut list = LookupList::new(FieldName::Customer);
        assert!(list.insert("Acme Farms"));
        assert_eq!(list.values(), &["Acme Farms".to_string()]);
    }

    #[test]
    fn test_insert_existing_value_is_noop() {
        let mut list = LookupList::from_values(FieldName::Customer, ["Acme Farms"]);
        assert!(!list.insert("Acme Farms"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let mut list = LookupList::from_values(FieldName::Product, ["Maize"]);
        assert!(list.insert("maize"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_empty_value_is_ignored() {
        let mut list = LookupList::new(FieldName::Driver);
        assert!(!list.insert(""));
        assert!(!list.insert("   "));
        assert!(list.is_empty());
    }

    #[test]
    fn test_from_values_dedups_in_order() {
        let list = LookupList::from_values(
            FieldName::TruckReg,
            ["AEZ 1234", "ACF 9876", "AEZ 1234", ""],
        );
        assert_eq!(list.values(), &["AEZ 1234".to_string(), "ACF 9876".to_string()]);
        assert_eq!(list.sorted(), vec!["ACF 9876".to_string(), "AEZ 1234".to_string()]);
    }
}
