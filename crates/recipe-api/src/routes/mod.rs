//! Route definitions
//!
//! Resource routes follow the `/<resource>/<Action>` convention for writes and
//! plain `GET` routes for reads.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{auth, categories, comments, health, likes, recipes, users};
use crate::state::AppState;

/// Create the API router with all resource routes (health is mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .nest("/user", user_routes())
        .nest("/recipe", recipe_routes())
        .nest("/comment", comment_routes())
        .nest("/like", like_routes())
        .nest("/category", category_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/healthcheck", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/auth", post(auth::login))
        .route("/auth/me", get(auth::current_user))
}

/// User administration routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users))
        .route("/:id", get(users::get_user))
        .route("/Update", put(users::update_user))
        .route("/Delete", post(users::delete_user))
        .route("/BatchDelete", post(users::batch_delete_users))
        .route("/Activate", post(users::activate_user))
        .route("/Deactivate", post(users::deactivate_user))
}

/// Recipe routes
fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(recipes::list_recipes))
        .route("/:id", get(recipes::get_recipe))
        .route("/Create", post(recipes::create_recipe))
        .route("/Update", put(recipes::update_recipe))
        .route("/Delete", post(recipes::delete_recipe))
        .route("/BatchDelete", post(recipes::batch_delete_recipes))
        .route("/Activate", post(recipes::activate_recipe))
        .route("/Deactivate", post(recipes::deactivate_recipe))
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(comments::list_comments))
        .route("/mine", get(comments::list_my_comments))
        .route("/:id", get(comments::get_comment))
        .route("/Create", post(comments::create_comment))
        .route("/Update", put(comments::update_comment))
        .route("/Delete", post(comments::delete_comment))
        .route("/BatchDelete", post(comments::batch_delete_comments))
        .route("/Activate", post(comments::activate_comment))
        .route("/Deactivate", post(comments::deactivate_comment))
}

/// Like routes
fn like_routes() -> Router<AppState> {
    Router::new()
        .route("/:id", get(likes::get_like))
        .route("/Create", post(likes::create_like))
        .route("/Delete", post(likes::delete_like))
}

/// Category routes
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::list_categories))
        .route("/:id", get(categories::get_category))
        .route("/:id/tree", get(categories::get_category_tree))
        .route("/Create", post(categories::create_category))
        .route("/Update", put(categories::update_category))
        .route("/Delete", post(categories::delete_category))
        .route("/BatchDelete", post(categories::batch_delete_categories))
}
