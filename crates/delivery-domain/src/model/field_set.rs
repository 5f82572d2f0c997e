//! Values entered on one delivery note form

use std::collections::BTreeMap;

use delivery_types::FieldName;
use serde::{Deserialize, Serialize};

/// Field values keyed by field name
///
/// Values are trimmed on entry, so a whitespace-only value counts as empty.
/// Serialized as a plain `{"Customer": "..."}` map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<FieldName, String>",
    into = "BTreeMap<FieldName, String>"
)]
pub struct FieldSet {
    values: BTreeMap<FieldName, String>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value
    pub fn set(&mut self, field: FieldName, value: impl AsRef<str>) {
        self.values.insert(field, value.as_ref().trim().to_string());
    }

    /// Builder form of [`FieldSet::set`]
    pub fn with(mut self, field: FieldName, value: impl AsRef<str>) -> Self {
        self.set(field, value);
        self
    }

    /// Value of a field; empty when never set
    pub fn get(&self, field: FieldName) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn is_filled(&self, field: FieldName) -> bool {
        !self.get(field).is_empty()
    }

    /// Fields from `required` that are empty, in the order given
    pub fn missing(&self, required: &[FieldName]) -> Vec<FieldName> {
        required
            .iter()
            .copied()
            .filter(|f| !self.is_filled(*f))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl<S: AsRef<str>> FromIterator<(FieldName, S)> for FieldSet {
    fn from_iter<I: IntoIterator<Item = (FieldName, S)>>(iter: I) -> Self {
        let mut set = FieldSet::new();
        for (field, value) in iter {
            set.set(field, value);
        }
        set
    }
}

impl From<BTreeMap<FieldName, String>> for FieldSet {
    fn from(values: BTreeMap<FieldName, String>) -> Self {
        values.into_iter().collect()
    }
}

impl From<FieldSet> for BTreeMap<FieldName, String> {
    fn from(set: FieldSet) -> Self {
        set.values
    }
}
