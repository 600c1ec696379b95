use std::fmt;

/// Which input sequence a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOrigin {
    Course,
    Instructor,
    Item,
}

impl RecordOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Course => "course",
            Self::Instructor => "instructor",
            Self::Item => "item",
        }
    }
}

impl fmt::Display for RecordOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A source record lacks a field the migration copies.
    ///
    /// `index` counts aligned records from zero, after the header element of
    /// the course and instructor files has been skipped. The element's
    /// position in those files is `index + 1`.
    #[error("{origin} record at position {index} has no `{field}` field")]
    MissingField {
        origin: RecordOrigin,
        index: usize,
        field: &'static str,
    },
}

impl CoreError {
    pub fn missing(origin: RecordOrigin, index: usize, field: &'static str) -> Self {
        Self::MissingField {
            origin,
            index,
            field,
        }
    }
}
