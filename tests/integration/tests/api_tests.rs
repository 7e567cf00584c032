//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

const MISSING_ID: i64 = 999_999_999;

async fn register(server: &TestServer) -> AuthResponse {
    let response = server.post("/register", &Credentials::unique()).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn admin_token(server: &TestServer) -> String {
    let response = server.post("/auth", &Credentials::admin()).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(auth.is_admin);
    auth.token
}

async fn create_recipe(server: &TestServer, token: &str, body: &CreateRecipeBody) -> RecipeResponse {
    let response = server.post_auth("/recipe/Create", token, body).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn get_recipe(server: &TestServer, token: &str, id: i64) -> RecipeResponse {
    let response = server
        .get_auth(&format!("/recipe/{id}"), token)
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    for path in ["/health", "/healthcheck", "/health/ready"] {
        let response = server.get(path).await.expect("Request failed");
        assert_status(response, StatusCode::OK).await.unwrap();
    }
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_me() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    assert!(!auth.is_admin);
    assert_eq!(auth.status, "inactive");
    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.token.is_empty());

    let response = server.get_auth("/auth/me", &auth.token).await.unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.id, auth.id);
    assert_eq!(me.email, auth.email);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let credentials = Credentials::unique();

    let response = server.post("/register", &credentials).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/register", &credentials).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .post("/auth", &json!({ "email": auth.email, "password": "not-the-password" }))
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/register",
            &json!({ "email": format!("short{}@example.com", unique_suffix()), "password": "123" }),
        )
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.code, "VALIDATION_ERROR");
    assert!(error.details.is_some());
}

#[tokio::test]
async fn test_token_required() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/recipe").await.unwrap();
    let error = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.code, "MISSING_AUTH");

    let response = server.get_auth("/recipe", "not-a-jwt").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_me_after_account_deleted() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let auth = register(&server).await;

    let response = server
        .post_auth("/user/Delete", &admin, &json!({ "id": auth.id }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth("/auth/me", &auth.token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Recipe Tests
// ============================================================================

#[tokio::test]
async fn test_recipe_publication_scenario() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server).await;
    let admin = admin_token(&server).await;
    let body = CreateRecipeBody::soup();

    // Unauthenticated create
    let response = server.post("/recipe/Create", &body).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let recipe = create_recipe(&server, &alice.token, &body).await;
    assert_eq!(recipe.status, "inactive");
    assert_eq!(recipe.steps.len(), 1);
    assert_eq!(recipe.steps[0].text, "Boil water");

    // Only admins moderate
    let response = server
        .post_auth("/recipe/Activate", &alice.token, &json!({ "id": recipe.id }))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_auth("/recipe/Activate", &admin, &json!({ "id": recipe.id }))
        .await
        .unwrap();
    let activated: RecipeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(activated.status, "active");

    let response = server
        .get_auth("/recipe?status=active", &alice.token)
        .await
        .unwrap();
    let list: Vec<RecipeSummaryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let entry = list
        .iter()
        .find(|r| r.id == recipe.id)
        .expect("activated recipe listed");
    assert_eq!(entry.title, body.title);
    assert_eq!(entry.comment_count, 0);
    assert_eq!(entry.like_count, 0);

    let response = server
        .get_auth("/recipe?status=inactive", &alice.token)
        .await
        .unwrap();
    let list: Vec<RecipeSummaryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(list.iter().all(|r| r.id != recipe.id));
}

#[tokio::test]
async fn test_status_change_via_update_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server).await;
    let recipe = create_recipe(&server, &alice.token, &CreateRecipeBody::soup()).await;

    let response = server
        .put_auth(
            "/recipe/Update",
            &alice.token,
            &json!({ "id": recipe.id, "status": "active" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    assert_eq!(get_recipe(&server, &alice.token, recipe.id).await.status, "inactive");
}

#[tokio::test]
async fn test_update_keeps_omitted_steps() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server).await;
    let body = CreateRecipeBody {
        steps: vec![StepBody::text("Chop onions"), StepBody::text("Fry onions")],
        ..CreateRecipeBody::soup()
    };
    let recipe = create_recipe(&server, &alice.token, &body).await;
    let first = recipe.steps[0].id;
    let second = recipe.steps[1].id;

    // Header-only update leaves steps untouched
    let response = server
        .put_auth(
            "/recipe/Update",
            &alice.token,
            &json!({ "id": recipe.id, "title": "Onion soup" }),
        )
        .await
        .unwrap();
    let updated: RecipeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "Onion soup");
    assert_eq!(updated.steps.len(), 2);

    // Existing step updated in place, new step appended
    let response = server
        .put_auth(
            "/recipe/Update",
            &alice.token,
            &json!({
                "id": recipe.id,
                "steps": [
                    StepBody::existing(second, "Fry onions slowly"),
                    StepBody::text("Serve"),
                ],
            }),
        )
        .await
        .unwrap();
    let updated: RecipeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.steps.len(), 3);
    assert_eq!(updated.steps[0].id, first);
    assert_eq!(updated.steps[1].id, second);
    assert_eq!(updated.steps[1].text, "Fry onions slowly");
    assert_eq!(updated.steps[2].text, "Serve");

    // A step id from nowhere fails the whole update
    let response = server
        .put_auth(
            "/recipe/Update",
            &alice.token,
            &json!({
                "id": recipe.id,
                "title": "Should not stick",
                "steps": [StepBody::existing(MISSING_ID, "ghost")],
            }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let after = get_recipe(&server, &alice.token, recipe.id).await;
    assert_eq!(after.title, "Onion soup");
    assert_eq!(after.steps.len(), 3);
}

#[tokio::test]
async fn test_recipe_delete_and_missing() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server).await;
    let admin = admin_token(&server).await;
    let recipe = create_recipe(&server, &alice.token, &CreateRecipeBody::soup()).await;

    let response = server
        .post_auth("/recipe/Delete", &alice.token, &json!({ "id": recipe.id }))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_auth("/recipe/Delete", &admin, &json!({ "id": recipe.id }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post_auth("/recipe/Delete", &admin, &json!({ "id": recipe.id }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .get_auth(&format!("/recipe/{}", recipe.id), &alice.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get_auth("/recipe/abc", &alice.token).await.unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.code, "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_batch_delete_report() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let a = create_recipe(&server, &admin, &CreateRecipeBody::soup()).await;
    let b = create_recipe(&server, &admin, &CreateRecipeBody::soup()).await;

    let response = server
        .post_auth(
            "/recipe/BatchDelete",
            &admin,
            &json!({ "ids": [a.id, MISSING_ID, b.id] }),
        )
        .await
        .unwrap();
    let report: BatchDeleteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(report.deleted, vec![a.id, b.id]);
    assert_eq!(report.not_found, vec![MISSING_ID]);

    let response = server
        .post_auth("/recipe/BatchDelete", &admin, &json!({ "ids": [] }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Comment & Like Tests
// ============================================================================

#[tokio::test]
async fn test_comments_and_likes_feed_counts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server).await;
    let bob = register(&server).await;
    let recipe = create_recipe(&server, &alice.token, &CreateRecipeBody::soup()).await;

    let response = server
        .post_auth(
            "/comment/Create",
            &bob.token,
            &json!({ "text": "Lovely", "recipeId": recipe.id }),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.user_id, bob.id);
    assert_eq!(comment.status, "inactive");

    let response = server
        .post_auth("/like/Create", &bob.token, &json!({ "recipeId": recipe.id }))
        .await
        .unwrap();
    let like: LikeResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(like.user_id, bob.id);

    // One like per user and recipe
    let response = server
        .post_auth("/like/Create", &bob.token, &json!({ "recipeId": recipe.id }))
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let full = get_recipe(&server, &alice.token, recipe.id).await;
    assert_eq!(full.comment_count, 1);
    assert_eq!(full.like_count, 1);
    assert_eq!(full.comments.len(), 1);
    assert_eq!(full.comments[0].text, "Lovely");

    let response = server
        .get_auth(&format!("/comment?recipeId={}", recipe.id), &alice.token)
        .await
        .unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 1);

    let response = server.get_auth("/comment/mine", &bob.token).await.unwrap();
    let mine: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(mine.iter().any(|c| c.id == comment.id));
}

#[tokio::test]
async fn test_comment_ownership() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server).await;
    let bob = register(&server).await;
    let admin = admin_token(&server).await;
    let recipe = create_recipe(&server, &alice.token, &CreateRecipeBody::soup()).await;

    let response = server
        .post_auth(
            "/comment/Create",
            &alice.token,
            &json!({ "text": "Mine", "recipeId": recipe.id }),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_auth(
            "/comment/Update",
            &bob.token,
            &json!({ "id": comment.id, "text": "Hijacked" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_auth("/comment/Delete", &bob.token, &json!({ "id": comment.id }))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .put_auth(
            "/comment/Update",
            &alice.token,
            &json!({ "id": comment.id, "text": "Mine, edited" }),
        )
        .await
        .unwrap();
    let edited: CommentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(edited.text, "Mine, edited");
    assert_eq!(edited.status, comment.status);

    // Admins may remove any comment
    let response = server
        .post_auth("/comment/Delete", &admin, &json!({ "id": comment.id }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post_auth("/comment/Delete", &alice.token, &json!({ "id": comment.id }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_like_delete_is_owner_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server).await;
    let bob = register(&server).await;
    let admin = admin_token(&server).await;
    let recipe = create_recipe(&server, &alice.token, &CreateRecipeBody::soup()).await;

    let response = server
        .post_auth("/like/Create", &alice.token, &json!({ "recipeId": recipe.id }))
        .await
        .unwrap();
    let like: LikeResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    for token in [&bob.token, &admin] {
        let response = server
            .post_auth("/like/Delete", token, &json!({ "id": like.id }))
            .await
            .unwrap();
        assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    }

    let response = server
        .post_auth("/like/Delete", &alice.token, &json!({ "id": like.id }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post_auth("/like/Delete", &alice.token, &json!({ "id": like.id }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(get_recipe(&server, &alice.token, recipe.id).await.like_count, 0);
}

// ============================================================================
// Category Tests
// ============================================================================

#[tokio::test]
async fn test_category_tree_and_cycle_rejection() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let alice = register(&server).await;

    let response = server
        .post_auth("/category/Create", &alice.token, &json!({ "name": "Nope" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let mut ids = Vec::new();
    let mut parent: Option<i64> = None;
    for name in ["Soups", "Cold soups", "Gazpacho"] {
        let response = server
            .post_auth(
                "/category/Create",
                &admin,
                &json!({ "name": name, "parentId": parent }),
            )
            .await
            .unwrap();
        let category: CategoryResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
        assert_eq!(category.parent_id, parent);
        parent = Some(category.id);
        ids.push(category.id);
    }

    let response = server
        .get_auth(&format!("/category/{}/tree", ids[0]), &alice.token)
        .await
        .unwrap();
    let tree: CategoryTreeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(tree.name, "Soups");
    assert_eq!(tree.children.len(), 1);
    assert_eq!(tree.children[0].id, ids[1]);
    assert_eq!(tree.children[0].children[0].id, ids[2]);

    // A category cannot move under its own descendant
    let response = server
        .put_auth(
            "/category/Update",
            &admin,
            &json!({ "id": ids[0], "name": "Soups", "parentId": ids[2] }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Recipes must reference an existing category
    let body = CreateRecipeBody {
        category_id: Some(MISSING_ID),
        ..CreateRecipeBody::soup()
    };
    let response = server
        .post_auth("/recipe/Create", &alice.token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let body = CreateRecipeBody {
        category_id: Some(ids[2]),
        ..CreateRecipeBody::soup()
    };
    let recipe = create_recipe(&server, &alice.token, &body).await;
    assert_eq!(recipe.category_id, Some(ids[2]));

    // Deleting the root cascades to descendants and clears the recipe's category
    let response = server
        .post_auth("/category/Delete", &admin, &json!({ "id": ids[0] }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/category/{}", ids[2]), &alice.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(get_recipe(&server, &alice.token, recipe.id).await.category_id, None);
}

// ============================================================================
// User Administration Tests
// ============================================================================

#[tokio::test]
async fn test_user_administration_is_admin_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let alice = register(&server).await;

    let response = server.get_auth("/user", &alice.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_auth("/user/Activate", &admin, &json!({ "id": alice.id }))
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.status, "active");

    let response = server
        .put_auth("/user/Update", &admin, &json!({ "id": alice.id, "isAdmin": true }))
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(user.is_admin);

    let response = server
        .get_auth(&format!("/user/{}", alice.id), &admin)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.email, alice.email);
}
