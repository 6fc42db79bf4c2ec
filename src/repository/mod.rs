//! Data access layer: trait per aggregate, Postgres implementation per trait.
//!
//! Every read is scoped by the owning user in the query itself; mutations are
//! paired with `owned_by` existence checks in the service layer.

pub mod auth;
pub mod items;
pub mod lists;

use async_trait::async_trait;
use thiserror::Error;

use crate::database::models::{TodoItem, TodoList, User};
use crate::types::{CreateItem, CreateList, UpdateItem, UpdateList};

pub use auth::PgAuthRepository;
pub use items::PgItemRepository;
pub use lists::PgListRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("duplicate value for {0}")]
    Duplicate(&'static str),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Postgres unique-violation class (SQLSTATE 23505).
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

/// Fields persisted for a new account; the password is already hashed here.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn create_user(&self, new_user: NewUser) -> Result<i64, RepositoryError>;
    async fn user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
}

#[async_trait]
pub trait ListRepository: Send + Sync {
    async fn create(&self, user_id: i64, list: &CreateList) -> Result<i64, RepositoryError>;
    async fn all_for_user(&self, user_id: i64) -> Result<Vec<TodoList>, RepositoryError>;
    async fn by_id(&self, user_id: i64, list_id: i64) -> Result<Option<TodoList>, RepositoryError>;
    /// Per-request ownership check: does `list_id` belong to `user_id`?
    async fn owned_by(&self, user_id: i64, list_id: i64) -> Result<bool, RepositoryError>;
    async fn update(&self, list_id: i64, update: &UpdateList) -> Result<(), RepositoryError>;
    async fn delete(&self, list_id: i64) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn create(&self, list_id: i64, item: &CreateItem) -> Result<i64, RepositoryError>;
    async fn all_in_list(&self, list_id: i64) -> Result<Vec<TodoItem>, RepositoryError>;
    async fn by_id(&self, user_id: i64, item_id: i64) -> Result<Option<TodoItem>, RepositoryError>;
    /// Ownership via the item's parent list.
    async fn owned_by(&self, user_id: i64, item_id: i64) -> Result<bool, RepositoryError>;
    async fn update(&self, item_id: i64, update: &UpdateItem) -> Result<(), RepositoryError>;
    async fn delete(&self, item_id: i64) -> Result<(), RepositoryError>;
}
