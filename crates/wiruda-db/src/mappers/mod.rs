//! Entity to model mappers
//!
//! `From<Model> for Entity` conversions from database rows to domain objects.
//! Enum columns are stored as lowercase text.

mod content;
mod profile;
mod records;

pub use profile::{parse_role, parse_status};
