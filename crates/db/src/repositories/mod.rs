//! Repository layer: one struct per table family.
//!
//! Each repository is a zero-sized struct with async methods that accept a
//! pool or connection and return `Result<T, sqlx::Error>`.

pub mod item_repo;
pub mod jsonb_table_repo;

pub use item_repo::ItemRepo;
pub use jsonb_table_repo::JsonbTableRepo;
