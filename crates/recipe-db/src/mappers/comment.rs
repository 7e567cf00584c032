//! Comment model → entity mapper

use recipe_core::{Comment, Id};

use crate::models::CommentModel;

use super::parse_status;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Id::new(model.id),
            text: model.text,
            date: model.date,
            status: parse_status(&model.status),
            user_id: Id::new(model.user_id),
            recipe_id: Id::new(model.recipe_id),
        }
    }
}
