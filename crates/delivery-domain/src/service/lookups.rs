//! Lookup list maintenance driven by a form layout

use std::collections::BTreeMap;

use delivery_types::{FieldName, Result};

use crate::model::{FieldSet, FormLayout};
use crate::repository::LookupRepository;

/// Sorted lookup values for every lookup-backed field of `layout`
pub fn load_lookups<R: LookupRepository + ?Sized>(
    repo: &R,
    layout: &FormLayout,
) -> Result<BTreeMap<FieldName, Vec<String>>> {
    let mut lookups = BTreeMap::new();
    for field in layout.lookup_fields() {
        lookups.insert(field, repo.load_list(field)?.sorted());
    }
    Ok(lookups)
}

/// Store the lookup-backed values of `fields`; returns the fields that
/// received a new value.
///
/// Stops at the first storage error. Values stored before the error stay
/// stored.
pub fn remember<R: LookupRepository + ?Sized>(
    repo: &R,
    layout: &FormLayout,
    fields: &FieldSet,
) -> Result<Vec<FieldName>> {
    let mut inserted = Vec::new();
    for field in layout.lookup_fields() {
        if repo.upsert_if_new(field, fields.get(field))? {
            inserted.push(field);
        }
    }
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryLookups {
        values: RefCell<BTreeMap<FieldName, Vec<String>>>,
    }

    impl LookupRepository for MemoryLookups {
        fn load_all(&self, field: FieldName) -> Result<Vec<String>> {
            Ok(self.values.borrow().get(&field).cloned().unwrap_or_default())
        }

        fn upsert_if_new(&self, field: FieldName, value: &str) -> Result<bool> {
            let mut values = self.values.borrow_mut();
            let list = values.entry(field).or_default();
            if value.is_empty() || list.iter().any(|v| v == value) {
                return Ok(false);
            }
            list.push(value.to_string());
            Ok(true)
        }
    }

    fn filled() -> FieldSet {
        FieldName::ALL
            .into_iter()
            .map(|f| (f, format!("{} 1", f)))
            .collect()
    }

    #[test]
    fn test_remember_only_touches_lookup_fields() {
        let repo = MemoryLookups::default();
        let inserted = remember(&repo, &FormLayout::default(), &filled()).unwrap();
        assert_eq!(inserted, FieldName::LOOKUP.to_vec());
        assert!(repo.load_all(FieldName::Quantity).unwrap().is_empty());
    }

    #[test]
    fn test_remember_twice_inserts_nothing() {
        let repo = MemoryLookups::default();
        remember(&repo, &FormLayout::default(), &filled()).unwrap();
        let inserted = remember(&repo, &FormLayout::default(), &filled()).unwrap();
        assert!(inserted.is_empty());
        assert_eq!(repo.load_all(FieldName::Customer).unwrap(), vec!["Customer 1"]);
    }

    #[test]
    fn test_load_lookups_sorted() {
        let repo = MemoryLookups::default();
        repo.upsert_if_new(FieldName::Product, "Maize").unwrap();
        repo.upsert_if_new(FieldName::Product, "Barley").unwrap();

        let lookups = load_lookups(&repo, &FormLayout::default()).unwrap();
        assert_eq!(lookups.len(), 6);
        assert_eq!(lookups[&FieldName::Product], vec!["Barley", "Maize"]);
        assert!(lookups[&FieldName::Customer].is_empty());
    }
}
