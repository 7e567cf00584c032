//! Like model → entity mapper

use recipe_core::{Id, Like};

use crate::models::LikeModel;

impl From<LikeModel> for Like {
    fn from(model: LikeModel) -> Self {
        Like {
            id: Id::new(model.id),
            user_id: Id::new(model.user_id),
            recipe_id: Id::new(model.recipe_id),
            created_at: model.created_at,
        }
    }
}
