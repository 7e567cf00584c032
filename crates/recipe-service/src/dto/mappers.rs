//! Entity to DTO mappers
//!
//! `From` conversions from domain entities to response DTOs, and from request
//! DTOs to the domain input types.

use recipe_core::{
    Category, CategoryDetail, CategoryTree, Comment, Like, NewCategory, NewRecipe, Recipe,
    RecipeAggregate, RecipeChanges, RecipeStep, RecipeSummary, StepDraft, User,
};

use super::requests::{
    CreateCategoryRequest, CreateRecipeRequest, StepRequest, UpdateCategoryRequest,
    UpdateRecipeRequest,
};
use super::responses::{
    CategoryDetailResponse, CategoryResponse, CategoryTreeResponse, CommentResponse, LikeResponse,
    RecipeResponse, RecipeSummaryResponse, StepResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            is_admin: user.is_admin,
            status: user.status,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Recipe Mappers
// ============================================================================

impl From<&RecipeStep> for StepResponse {
    fn from(step: &RecipeStep) -> Self {
        Self {
            id: step.id,
            title: step.title.clone(),
            text: step.text.clone(),
            image_path: step.image_path.clone(),
        }
    }
}

impl From<&RecipeAggregate> for RecipeResponse {
    fn from(aggregate: &RecipeAggregate) -> Self {
        let Recipe {
            id,
            title,
            preview_image_path,
            category_id,
            status,
            created_at,
            updated_at,
        } = &aggregate.recipe;

        Self {
            id: *id,
            title: title.clone(),
            preview_image_path: preview_image_path.clone(),
            category_id: *category_id,
            status: *status,
            created_at: *created_at,
            updated_at: *updated_at,
            steps: aggregate.steps.iter().map(StepResponse::from).collect(),
            comments: aggregate.comments.iter().map(CommentResponse::from).collect(),
            comment_count: aggregate.comment_count,
            like_count: aggregate.like_count,
        }
    }
}

impl From<RecipeAggregate> for RecipeResponse {
    fn from(aggregate: RecipeAggregate) -> Self {
        Self::from(&aggregate)
    }
}

impl From<&RecipeSummary> for RecipeSummaryResponse {
    fn from(summary: &RecipeSummary) -> Self {
        let recipe = &summary.recipe;
        Self {
            id: recipe.id,
            title: recipe.title.clone(),
            preview_image_path: recipe.preview_image_path.clone(),
            category_id: recipe.category_id,
            status: recipe.status,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
            comment_count: summary.comment_count,
            like_count: summary.like_count,
        }
    }
}

impl From<StepRequest> for StepDraft {
    fn from(step: StepRequest) -> Self {
        Self {
            id: step.id,
            title: step.title,
            text: step.text,
            image_path: step.image_path,
        }
    }
}

impl From<CreateRecipeRequest> for NewRecipe {
    fn from(request: CreateRecipeRequest) -> Self {
        Self {
            title: request.title,
            preview_image_path: request.preview_image_path,
            category_id: request.category_id,
            steps: request.steps.into_iter().map(StepDraft::from).collect(),
        }
    }
}

impl From<UpdateRecipeRequest> for RecipeChanges {
    fn from(request: UpdateRecipeRequest) -> Self {
        Self {
            title: request.title,
            preview_image_path: request.preview_image_path,
            category_id: request.category_id,
            status: request.status,
            steps: request.steps.into_iter().map(StepDraft::from).collect(),
        }
    }
}

// ============================================================================
// Comment / Like Mappers
// ============================================================================

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            text: comment.text.clone(),
            date: comment.date,
            status: comment.status,
            user_id: comment.user_id,
            recipe_id: comment.recipe_id,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}

impl From<&Like> for LikeResponse {
    fn from(like: &Like) -> Self {
        Self {
            id: like.id,
            user_id: like.user_id,
            recipe_id: like.recipe_id,
            created_at: like.created_at,
        }
    }
}

// ============================================================================
// Category Mappers
// ============================================================================

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            parent_id: category.parent_id,
        }
    }
}

impl From<&CategoryDetail> for CategoryDetailResponse {
    fn from(detail: &CategoryDetail) -> Self {
        Self {
            category: CategoryResponse::from(&detail.category),
            children: detail.children.iter().map(CategoryResponse::from).collect(),
        }
    }
}

impl From<&CategoryTree> for CategoryTreeResponse {
    fn from(tree: &CategoryTree) -> Self {
        // Same pre-order slot scheme as `CategoryTree::build`; no recursion
        let mut order: Vec<(&CategoryTree, usize)> = Vec::new();
        let mut pending = vec![(tree, 0)];
        while let Some((node, parent)) = pending.pop() {
            let slot = order.len();
            pending.extend(node.children.iter().rev().map(|child| (child, slot)));
            order.push((node, parent));
        }

        let mut assembled: Vec<Vec<CategoryTreeResponse>> = order.iter().map(|_| Vec::new()).collect();
        for (slot, (node, parent)) in order.into_iter().enumerate().skip(1).rev() {
            let mut children = std::mem::take(&mut assembled[slot]);
            children.reverse();
            assembled[parent].push(Self {
                category: CategoryResponse::from(&node.category),
                children,
            });
        }

        let mut children = assembled.swap_remove(0);
        children.reverse();
        Self {
            category: CategoryResponse::from(&tree.category),
            children,
        }
    }
}

impl From<CreateCategoryRequest> for NewCategory {
    fn from(request: CreateCategoryRequest) -> Self {
        Self {
            name: request.name,
            parent_id: request.parent_id,
        }
    }
}

impl From<UpdateCategoryRequest> for NewCategory {
    fn from(request: UpdateCategoryRequest) -> Self {
        Self {
            name: request.name,
            parent_id: request.parent_id,
        }
    }
}
