//! The `(id, jsonb)` row shape shared by every destination table.

use serde_json::Value;
use sqlx::FromRow;
use waitlist_core::records::JsonbRecord;
use waitlist_core::types::RecordId;

/// A row from a destination table.
///
/// `id` mirrors the `id` field inside the document.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct JsonbRow {
    pub id: RecordId,
    pub jsonb: Value,
}

impl JsonbRow {
    pub fn from_record<R: JsonbRecord>(record: &R) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: record.id(),
            jsonb: record.to_jsonb()?,
        })
    }

    /// Convert a slice of records, stopping at the first serialization error.
    pub fn from_records<R: JsonbRecord>(records: &[R]) -> Result<Vec<Self>, serde_json::Error> {
        records.iter().map(Self::from_record).collect()
    }
}
