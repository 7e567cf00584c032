//! In-memory repositories backing the service unit tests

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use recipe_common::JwtService;
use recipe_core::traits::{
    CategoryRepository, CommentFilter, CommentRepository, LikeRepository, RecipeRepository,
    RepoResult, UserRepository,
};
use recipe_core::{
    check_category_depth, BatchDeleteOutcome, Category, Comment, DomainError, Id, Like,
    NewCategory, NewComment, NewRecipe, NewUser, Recipe, RecipeAggregate, RecipeChanges,
    RecipeStep, RecipeSummary, Status, StepDraft, User, UserChanges,
};
use sqlx::postgres::PgPoolOptions;

use super::context::{ServiceContext, ServiceContextBuilder};

pub(crate) const SECRET: &str = "service-unit-test-secret";

struct Table<T> {
    rows: Mutex<Vec<T>>,
    next_id: AtomicI64,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn next_id(&self) -> Id {
        Id::new(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    fn insert(&self, row: T) -> T {
        self.rows.lock().unwrap().push(row.clone());
        row
    }

    fn all(&self) -> Vec<T> {
        self.rows.lock().unwrap().clone()
    }

    fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.lock().unwrap().iter().find(|row| pred(row)).cloned()
    }

    fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| pred(row))
            .cloned()
            .collect()
    }

    fn modify(&self, pred: impl Fn(&T) -> bool, f: impl FnOnce(&mut T)) -> Option<T> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows.iter_mut().find(|row| pred(row))?;
        f(row);
        Some(row.clone())
    }

    fn remove(&self, pred: impl Fn(&T) -> bool) -> usize {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| !pred(row));
        before - rows.len()
    }
}

// ============================================================================
// Users
// ============================================================================

struct FakeUsers(Table<(User, String)>);

#[async_trait]
impl UserRepository for FakeUsers {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>> {
        Ok(self.0.find(|(u, _)| u.id == id).map(|(u, _)| u))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let email = email.to_lowercase();
        Ok(self.0.find(|(u, _)| u.email.to_lowercase() == email).map(|(u, _)| u))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let email = email.to_lowercase();
        Ok(self.0.find(|(u, _)| u.email.to_lowercase() == email).is_some())
    }

    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        if self.email_exists(&user.email).await? {
            return Err(DomainError::EmailAlreadyExists);
        }
        let now = Utc::now();
        let created = User {
            id: self.0.next_id(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            status: user.status,
            created_at: now,
            updated_at: now,
        };
        self.0.insert((created.clone(), user.password_hash.clone()));
        Ok(created)
    }

    async fn update(&self, id: Id, changes: &UserChanges) -> RepoResult<User> {
        self.0
            .modify(
                |(u, _)| u.id == id,
                |(u, hash)| {
                    if let Some(email) = &changes.email {
                        u.email.clone_from(email);
                    }
                    if let Some(new_hash) = &changes.password_hash {
                        hash.clone_from(new_hash);
                    }
                    if let Some(is_admin) = changes.is_admin {
                        u.is_admin = is_admin;
                    }
                    if let Some(status) = changes.status {
                        u.status = status;
                    }
                },
            )
            .map(|(u, _)| u)
            .ok_or(DomainError::UserNotFound(id))
    }

    async fn set_status(&self, id: Id, status: Status) -> RepoResult<Option<User>> {
        Ok(self
            .0
            .modify(|(u, _)| u.id == id, |(u, _)| u.status = status)
            .map(|(u, _)| u))
    }

    async fn list(&self, status: Option<Status>) -> RepoResult<Vec<User>> {
        Ok(self
            .0
            .filter(|(u, _)| status.is_none_or(|s| u.status == s))
            .into_iter()
            .map(|(u, _)| u)
            .collect())
    }

    async fn get_password_hash(&self, id: Id) -> RepoResult<Option<String>> {
        Ok(self.0.find(|(u, _)| u.id == id).map(|(_, hash)| hash))
    }

    async fn remove_by_id(&self, id: Id) -> RepoResult<bool> {
        Ok(self.0.remove(|(u, _)| u.id == id) > 0)
    }

    async fn remove_all_by_ids(&self, ids: &[Id]) -> RepoResult<BatchDeleteOutcome> {
        let removed: Vec<Id> = self
            .0
            .filter(|(u, _)| ids.contains(&u.id))
            .into_iter()
            .map(|(u, _)| u.id)
            .collect();
        self.0.remove(|(u, _)| ids.contains(&u.id));
        Ok(BatchDeleteOutcome::from_removed(ids, &removed))
    }
}

// ============================================================================
// Categories
// ============================================================================

struct FakeCategories(Table<Category>);

impl FakeCategories {
    fn descendants(&self, id: Id) -> Vec<Category> {
        let all = self.0.all();
        let mut found: Vec<Category> = all.iter().filter(|c| c.id == id).cloned().collect();
        let mut cursor = 0;
        while cursor < found.len() {
            let parent = found[cursor].id;
            for child in all.iter().filter(|c| c.parent_id == Some(parent)) {
                if !found.iter().any(|f| f.id == child.id) {
                    found.push(child.clone());
                }
            }
            cursor += 1;
        }
        found
    }

    fn depth(&self, id: Id) -> usize {
        let all = self.0.all();
        let mut depth = 0;
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let Some(category) = all.iter().find(|c| c.id == current) else {
                break;
            };
            depth += 1;
            cursor = category.parent_id;
        }
        depth
    }

    fn height(&self, id: Id) -> usize {
        self.descendants(id)
            .iter()
            .map(|c| self.depth(c.id))
            .max()
            .map_or(1, |deepest| deepest + 1 - self.depth(id))
    }
}

#[async_trait]
impl CategoryRepository for FakeCategories {
    async fn create(&self, category: &NewCategory) -> RepoResult<Category> {
        if let Some(parent_id) = category.parent_id {
            check_category_depth(self.depth(parent_id), 1)?;
        }
        Ok(self.0.insert(Category {
            id: self.0.next_id(),
            name: category.name.clone(),
            parent_id: category.parent_id,
        }))
    }

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Category>> {
        Ok(self.0.find(|c| c.id == id))
    }

    async fn children(&self, id: Id) -> RepoResult<Vec<Category>> {
        Ok(self.0.filter(|c| c.parent_id == Some(id)))
    }

    async fn list(&self) -> RepoResult<Vec<Category>> {
        Ok(self.0.all())
    }

    async fn update(&self, id: Id, category: &NewCategory) -> RepoResult<Category> {
        if let Some(parent_id) = category.parent_id {
            if self.descendants(id).iter().any(|c| c.id == parent_id) {
                return Err(DomainError::CategoryCycle);
            }
            check_category_depth(self.depth(parent_id), self.height(id))?;
        }
        self.0
            .modify(
                |c| c.id == id,
                |c| {
                    c.name.clone_from(&category.name);
                    c.parent_id = category.parent_id;
                },
            )
            .ok_or(DomainError::CategoryNotFound(id))
    }

    async fn subtree(&self, id: Id) -> RepoResult<Vec<Category>> {
        Ok(self.descendants(id))
    }

    async fn remove_by_id(&self, id: Id) -> RepoResult<bool> {
        let doomed: Vec<Id> = self.descendants(id).iter().map(|c| c.id).collect();
        Ok(self.0.remove(|c| doomed.contains(&c.id)) > 0)
    }

    async fn remove_all_by_ids(&self, ids: &[Id]) -> RepoResult<BatchDeleteOutcome> {
        let mut removed = Vec::new();
        for id in ids {
            if self.remove_by_id(*id).await? {
                removed.push(*id);
            }
        }
        Ok(BatchDeleteOutcome::from_removed(ids, &removed))
    }
}

// ============================================================================
// Comments
// ============================================================================

struct FakeComments(Table<Comment>);

#[async_trait]
impl CommentRepository for FakeComments {
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        Ok(self.0.insert(Comment {
            id: self.0.next_id(),
            text: comment.text.clone(),
            date: Utc::now(),
            status: Status::Inactive,
            user_id: comment.user_id,
            recipe_id: comment.recipe_id,
        }))
    }

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Comment>> {
        Ok(self.0.find(|c| c.id == id))
    }

    async fn list(&self) -> RepoResult<Vec<Comment>> {
        Ok(self.0.all())
    }

    async fn find_by(&self, filter: CommentFilter) -> RepoResult<Vec<Comment>> {
        Ok(self.0.filter(|c| match filter {
            CommentFilter::Recipe(id) => c.recipe_id == id,
            CommentFilter::Status(status) => c.status == status,
            CommentFilter::Author(id) => c.user_id == id,
            CommentFilter::RecipeAndStatus(id, status) => c.recipe_id == id && c.status == status,
        }))
    }

    async fn update_text(&self, id: Id, text: &str) -> RepoResult<Comment> {
        self.0
            .modify(|c| c.id == id, |c| c.text = text.to_string())
            .ok_or(DomainError::CommentNotFound(id))
    }

    async fn set_status(&self, id: Id, status: Status) -> RepoResult<Option<Comment>> {
        Ok(self.0.modify(|c| c.id == id, |c| c.status = status))
    }

    async fn remove_by_id(&self, id: Id) -> RepoResult<bool> {
        Ok(self.0.remove(|c| c.id == id) > 0)
    }

    async fn remove_all_by_ids(&self, ids: &[Id]) -> RepoResult<BatchDeleteOutcome> {
        let removed: Vec<Id> = self
            .0
            .filter(|c| ids.contains(&c.id))
            .iter()
            .map(|c| c.id)
            .collect();
        self.0.remove(|c| ids.contains(&c.id));
        Ok(BatchDeleteOutcome::from_removed(ids, &removed))
    }
}

// ============================================================================
// Likes
// ============================================================================

struct FakeLikes(Table<Like>);

#[async_trait]
impl LikeRepository for FakeLikes {
    async fn create(&self, user_id: Id, recipe_id: Id) -> RepoResult<Like> {
        if self
            .0
            .find(|l| l.user_id == user_id && l.recipe_id == recipe_id)
            .is_some()
        {
            return Err(DomainError::LikeAlreadyExists);
        }
        Ok(self.0.insert(Like {
            id: self.0.next_id(),
            user_id,
            recipe_id,
            created_at: Utc::now(),
        }))
    }

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Like>> {
        Ok(self.0.find(|l| l.id == id))
    }

    async fn remove_by_id(&self, id: Id) -> RepoResult<bool> {
        Ok(self.0.remove(|l| l.id == id) > 0)
    }
}

// ============================================================================
// Recipes
// ============================================================================

struct FakeRecipes {
    recipes: Table<RecipeAggregate>,
    step_ids: AtomicI64,
}

impl FakeRecipes {
    fn step(&self, recipe_id: Id, draft: &StepDraft) -> RecipeStep {
        RecipeStep {
            id: Id::new(self.step_ids.fetch_add(1, Ordering::SeqCst)),
            recipe_id,
            title: draft.title.clone(),
            text: draft.text.clone(),
            image_path: draft.image_path.clone(),
        }
    }
}

#[async_trait]
impl RecipeRepository for FakeRecipes {
    async fn create(&self, recipe: &NewRecipe) -> RepoResult<RecipeAggregate> {
        recipe.validate()?;
        let id = self.recipes.next_id();
        let now = Utc::now();
        Ok(self.recipes.insert(RecipeAggregate {
            recipe: Recipe {
                id,
                title: recipe.title.clone(),
                preview_image_path: recipe.preview_image_path.clone(),
                category_id: recipe.category_id,
                status: Status::Inactive,
                created_at: now,
                updated_at: now,
            },
            steps: recipe.steps.iter().map(|s| self.step(id, s)).collect(),
            comments: Vec::new(),
            comment_count: 0,
            like_count: 0,
        }))
    }

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<RecipeAggregate>> {
        Ok(self.recipes.find(|r| r.recipe.id == id))
    }

    async fn list(&self, status: Option<Status>) -> RepoResult<Vec<RecipeSummary>> {
        Ok(self
            .recipes
            .filter(|r| status.is_none_or(|s| r.recipe.status == s))
            .into_iter()
            .map(|r| RecipeSummary {
                recipe: r.recipe,
                comment_count: r.comment_count,
                like_count: r.like_count,
            })
            .collect())
    }

    async fn update(&self, id: Id, changes: &RecipeChanges) -> RepoResult<RecipeAggregate> {
        let mut aggregate = self
            .recipes
            .find(|r| r.recipe.id == id)
            .ok_or(DomainError::RecipeNotFound(id))?;

        if let Some(title) = &changes.title {
            aggregate.recipe.title.clone_from(title);
        }
        if let Some(status) = changes.status {
            aggregate.recipe.status = status;
        }
        if changes.category_id.is_some() {
            aggregate.recipe.category_id = changes.category_id;
        }
        for draft in &changes.steps {
            match draft.id {
                Some(step_id) => {
                    let step = aggregate
                        .steps
                        .iter_mut()
                        .find(|s| s.id == step_id)
                        .ok_or(DomainError::StepNotFound(step_id))?;
                    step.text.clone_from(&draft.text);
                    step.title.clone_from(&draft.title);
                }
                None => aggregate.steps.push(self.step(id, draft)),
            }
        }

        let stored = aggregate.clone();
        self.recipes.modify(|r| r.recipe.id == id, |r| *r = stored);
        Ok(aggregate)
    }

    async fn set_status(&self, id: Id, status: Status) -> RepoResult<Option<RecipeAggregate>> {
        Ok(self
            .recipes
            .modify(|r| r.recipe.id == id, |r| r.recipe.status = status))
    }

    async fn remove_by_id(&self, id: Id) -> RepoResult<bool> {
        Ok(self.recipes.remove(|r| r.recipe.id == id) > 0)
    }

    async fn remove_all_by_ids(&self, ids: &[Id]) -> RepoResult<BatchDeleteOutcome> {
        let removed: Vec<Id> = self
            .recipes
            .filter(|r| ids.contains(&r.recipe.id))
            .iter()
            .map(|r| r.recipe.id)
            .collect();
        self.recipes.remove(|r| ids.contains(&r.recipe.id));
        Ok(BatchDeleteOutcome::from_removed(ids, &removed))
    }
}

// ============================================================================
// Context helpers
// ============================================================================

/// Context over fresh in-memory stores; must run inside a tokio runtime
pub(crate) fn context() -> ServiceContext {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/recipes_unit")
        .unwrap();

    ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(Arc::new(FakeUsers(Table::new())))
        .category_repo(Arc::new(FakeCategories(Table::new())))
        .recipe_repo(Arc::new(FakeRecipes {
            recipes: Table::new(),
            step_ids: AtomicI64::new(100),
        }))
        .comment_repo(Arc::new(FakeComments(Table::new())))
        .like_repo(Arc::new(FakeLikes(Table::new())))
        .jwt_service(Arc::new(JwtService::new(SECRET, 3600)))
        .build()
        .unwrap()
}

/// Insert a user directly into the store
pub(crate) async fn seed_user(ctx: &ServiceContext, email: &str, is_admin: bool) -> User {
    let hash = ctx.password_service().hash("secret123").unwrap();
    let mut user = NewUser::registration(email.to_string(), hash);
    user.is_admin = is_admin;
    ctx.user_repo().create(&user).await.unwrap()
}

/// Insert a one-step recipe directly into the store
pub(crate) async fn seed_recipe(ctx: &ServiceContext, title: &str) -> RecipeAggregate {
    let recipe = NewRecipe {
        title: title.to_string(),
        preview_image_path: None,
        category_id: None,
        steps: vec![StepDraft::text("Boil water")],
    };
    ctx.recipe_repo().create(&recipe).await.unwrap()
}
