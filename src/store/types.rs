//! Core data types for the Pulseboard document store
//!
//! - `Record`: a persisted category/value document
//! - `NewRecord`: insert input, before the store assigns an id

use serde::{Deserialize, Serialize};

/// A single persisted record
///
/// Serialized as `{ "id": ..., "category": ..., "value": ... }`, which is
/// both the stored document body and the API wire shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Store-assigned identifier (UUID v4 string)
    pub id: String,
    /// Category label (never empty once persisted through the API)
    pub category: String,
    /// Measured value
    pub value: f64,
}

/// A record that has not been persisted yet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewRecord {
    pub category: String,
    pub value: f64,
}

impl NewRecord {
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }

    /// Attach a freshly generated id
    pub fn into_record(self) -> Record {
        Record {
            id: new_record_id(),
            category: self.category,
            value: self.value,
        }
    }
}

/// Generate a new record id
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Sum of `value` across a slice of records
pub fn total_value(records: &[Record]) -> f64 {
    records.iter().map(|r| r.value).sum()
}
