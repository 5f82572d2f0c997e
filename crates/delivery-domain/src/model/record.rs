//! Finalized delivery record

use chrono::{NaiveDateTime, Timelike};
use delivery_types::{Error, Result};
use serde::{Deserialize, Serialize};

use super::{FieldSet, FormLayout};

/// A completed form with its creation time. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    fields: FieldSet,
    created_at: NaiveDateTime,
}

impl DeliveryRecord {
    /// Snapshot `fields` after checking every layout field is filled.
    ///
    /// The timestamp is truncated to whole seconds, the precision of the
    /// history log.
    pub fn finalize(fields: FieldSet, layout: &FormLayout, created_at: NaiveDateTime) -> Result<Self> {
        let missing = fields.missing(&layout.required());
        if !missing.is_empty() {
            return Err(Error::IncompleteRecord { missing });
        }
        let created_at = created_at.with_nanosecond(0).unwrap_or(created_at);
        Ok(Self { fields, created_at })
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
}
