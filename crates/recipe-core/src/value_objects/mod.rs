//! Value objects - immutable types that represent domain concepts

mod batch;
mod id;
mod status;

pub use batch::BatchDeleteOutcome;
pub use id::{Id, IdParseError};
pub use status::{Moderation, Status, StatusParseError};
