//! Category model → entity mapper

use recipe_core::{Category, Id};

use crate::models::CategoryModel;

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: Id::new(model.id),
            name: model.name,
            parent_id: model.parent_id.map(Id::new),
        }
    }
}
