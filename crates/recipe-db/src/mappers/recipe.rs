//! Recipe model → entity mappers

use recipe_core::{Comment, Id, Recipe, RecipeAggregate, RecipeStep, RecipeSummary};

use crate::models::{
    CommentModel, RecipeCountsModel, RecipeModel, RecipeStepModel, RecipeSummaryModel,
};

use super::parse_status;

impl From<RecipeModel> for Recipe {
    fn from(model: RecipeModel) -> Self {
        Recipe {
            id: Id::new(model.id),
            title: model.title,
            preview_image_path: model.preview_image_path,
            category_id: model.category_id.map(Id::new),
            status: parse_status(&model.status),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<RecipeStepModel> for RecipeStep {
    fn from(model: RecipeStepModel) -> Self {
        RecipeStep {
            id: Id::new(model.id),
            recipe_id: Id::new(model.recipe_id),
            title: model.title,
            text: model.text,
            image_path: model.image_path,
        }
    }
}

impl From<RecipeSummaryModel> for RecipeSummary {
    fn from(model: RecipeSummaryModel) -> Self {
        RecipeSummary {
            recipe: model.recipe.into(),
            comment_count: model.counts.comment_count,
            like_count: model.counts.like_count,
        }
    }
}

/// Compose the read model from the rows loaded for one recipe
pub fn assemble_aggregate(
    header: RecipeModel,
    steps: Vec<RecipeStepModel>,
    comments: Vec<CommentModel>,
    counts: RecipeCountsModel,
) -> RecipeAggregate {
    RecipeAggregate {
        recipe: header.into(),
        steps: steps.into_iter().map(RecipeStep::from).collect(),
        comments: comments.into_iter().map(Comment::from).collect(),
        comment_count: counts.comment_count,
        like_count: counts.like_count,
    }
}
