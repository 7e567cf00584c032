//! Like entity - a (user, recipe) pair

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// A user's like of a recipe; existence is the signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub id: Id,
    pub user_id: Id,
    pub recipe_id: Id,
    pub created_at: DateTime<Utc>,
}

impl Like {
    /// Check whether the given user created this like
    #[inline]
    pub fn is_owned_by(&self, user_id: Id) -> bool {
        self.user_id == user_id
    }
}
