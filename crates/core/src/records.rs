//! Input and output record shapes for the waitlist migration.
//!
//! Copied fields are kept as raw JSON values: a field only has to be present,
//! and whatever it holds (string, number, `null`) is carried over unchanged.
//! Outputs serialize in camelCase, which is the shape stored in the
//! destination `jsonb` columns.

use serde::Serialize;
use serde_json::Value;

use crate::error::{CoreError, RecordOrigin};
use crate::types::RecordId;

/// Follow `path` through nested objects. `None` if any step is absent or
/// the value at that step is not an object.
fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.as_object()?.get(*key))
}

fn required(
    value: &Value,
    path: &[&str],
    field: &'static str,
    origin: RecordOrigin,
    index: usize,
) -> Result<Value, CoreError> {
    lookup(value, path)
        .cloned()
        .ok_or_else(|| CoreError::missing(origin, index, field))
}

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// An element of the courses or instructors JSON array.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSource {
    pub name: Value,
}

impl NamedSource {
    pub fn from_json(
        value: &Value,
        origin: RecordOrigin,
        index: usize,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            name: required(value, &["name"], "name", origin, index)?,
        })
    }
}

/// The parts of an inventory item's `jsonb` document that a reserve copies.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub title: Value,
    pub barcode: Value,
    /// `location.name` from the document.
    pub location: Value,
}

impl Item {
    pub fn from_jsonb(value: &Value, index: usize) -> Result<Self, CoreError> {
        let origin = RecordOrigin::Item;
        Ok(Self {
            title: required(value, &["title"], "title", origin, index)?,
            barcode: required(value, &["barcode"], "barcode", origin, index)?,
            location: required(value, &["location", "name"], "location.name", origin, index)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// A record stored as a single `jsonb` document keyed by its own id.
pub trait JsonbRecord: Serialize {
    fn id(&self) -> RecordId;

    fn to_jsonb(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub id: RecordId,
    pub name: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instructor {
    pub id: RecordId,
    pub name: Value,
}

/// An item placed on reserve for a course, denormalized with the names of
/// the course and instructor it references.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reserve {
    pub id: RecordId,
    pub title: Value,
    pub location: Value,
    pub barcode: Value,
    pub instructor_id: RecordId,
    pub instructor: Value,
    pub course_id: RecordId,
    pub course: Value,
}

impl JsonbRecord for Course {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl JsonbRecord for Instructor {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl JsonbRecord for Reserve {
    fn id(&self) -> RecordId {
        self.id
    }
}
