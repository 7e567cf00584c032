//! Model → entity mappers
//!
//! `From<Model> for Entity` conversions plus the status column codec.

mod category;
mod comment;
mod like;
mod recipe;
mod user;

pub use recipe::assemble_aggregate;

use recipe_core::Status;

/// Decode a status column; the CHECK constraint limits it to known values
pub(crate) fn parse_status(value: &str) -> Status {
    value.parse().unwrap_or_default()
}
