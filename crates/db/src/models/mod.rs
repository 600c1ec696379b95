//! Row structs for the `(id, jsonb)` tables the migration reads and writes.

pub mod jsonb_row;
