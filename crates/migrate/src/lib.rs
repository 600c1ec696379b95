//! Migrates course, instructor and item data into the waitlist schema.
//!
//! The run is a single pass: load two JSON arrays and the inventory item
//! table, align them by position, build course, instructor and reserve
//! records, then overwrite the three destination tables.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod source;
