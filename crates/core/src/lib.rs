pub mod error;
pub mod normalize;
pub mod records;
pub mod transform;
pub mod types;
