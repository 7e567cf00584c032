//! User model → entity mapper

use recipe_core::{Id, User};

use crate::models::UserModel;

use super::parse_status;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Id::new(model.id),
            email: model.email,
            is_admin: model.is_admin,
            status: parse_status(&model.status),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
