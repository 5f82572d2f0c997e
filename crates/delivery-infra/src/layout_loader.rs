//! Form layout loader from TOML
//!
//! ```toml
//! [[fields]]
//! field = "Customer"
//! label = "Customer Name"
//! lookup = true
//!
//! [[fields]]
//! field = "Quantity"
//! ```
//!
//! `label` defaults to the field's standard label and `lookup` to whether
//! the field normally keeps a history.

use std::fs;
use std::path::Path;

use delivery_domain::model::{FieldSpec, FormLayout};
use delivery_types::{FieldName, LayoutError, Result};
use serde::Deserialize;

/// Container for parsing a layout file
#[derive(Debug, Deserialize)]
struct LayoutFile {
    fields: Vec<FieldEntry>,
}

#[derive(Debug, Deserialize)]
struct FieldEntry {
    field: FieldName,
    label: Option<String>,
    lookup: Option<bool>,
}

impl From<FieldEntry> for FieldSpec {
    fn from(entry: FieldEntry) -> Self {
        FieldSpec::new(
            entry.field,
            entry.label.unwrap_or_else(|| entry.field.label().to_string()),
            entry.lookup.unwrap_or_else(|| entry.field.is_lookup()),
        )
    }
}

/// Load a form layout from a TOML file
pub fn load_layout_from_file(path: &Path) -> Result<FormLayout> {
    let content = fs::read_to_string(path).map_err(|e| {
        LayoutError::Parse(format!("Failed to read layout file {}: {}", path.display(), e))
    })?;
    load_layout_from_str(&content)
}

/// Load a form layout from a TOML string
pub fn load_layout_from_str(toml_content: &str) -> Result<FormLayout> {
    let file: LayoutFile = toml::from_str(toml_content)
        .map_err(|e| LayoutError::Parse(format!("Failed to parse layout TOML: {}", e)))?;
    let layout = FormLayout::new(file.fields.into_iter().map(FieldSpec::from).collect())?;
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use delivery_types::Error;

    const TEST_TOML: &str = r#"
[[fields]]
field = "Customer"
label = "Customer Name"

[[fields]]
field = "Product"

[[fields]]
field = "Quantity"

[[fields]]
field = "Destination"
lookup = true
"#;

    #[test]
    fn test_load_from_str() {
        let layout = load_layout_from_str(TEST_TOML).unwrap();
        assert_eq!(
            layout.required(),
            vec![
                FieldName::Customer,
                FieldName::Product,
                FieldName::Quantity,
                FieldName::Destination
            ]
        );
        assert_eq!(layout.spec(FieldName::Customer).unwrap().label, "Customer Name");
        assert_eq!(layout.spec(FieldName::Product).unwrap().label, "Product");
    }

    #[test]
    fn test_lookup_defaults_and_overrides() {
        let layout = load_layout_from_str(TEST_TOML).unwrap();
        assert_eq!(
            layout.lookup_fields(),
            vec![FieldName::Customer, FieldName::Product, FieldName::Destination]
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = load_layout_from_str("[[fields]]\nfield = \"Weight\"\n");
        assert!(matches!(result, Err(Error::Layout(LayoutError::Parse(_)))));
    }

    #[test]
    fn test_duplicate_field_is_rejected() {
        let result = load_layout_from_str(
            "[[fields]]\nfield = \"Driver\"\n\n[[fields]]\nfield = \"Driver\"\n",
        );
        assert!(matches!(
            result,
            Err(Error::Layout(LayoutError::Duplicate(FieldName::Driver)))
        ));
    }

    #[test]
    fn test_empty_layout_is_rejected() {
        let result = load_layout_from_str("fields = []\n");
        assert!(matches!(result, Err(Error::Layout(LayoutError::Empty))));
    }
}
