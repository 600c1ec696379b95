/// Every migrated record is keyed by a random (v4) UUID.
pub type RecordId = uuid::Uuid;

/// Generate a fresh record identifier.
pub fn new_record_id() -> RecordId {
    uuid::Uuid::new_v4()
}
