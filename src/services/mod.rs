//! Domain services sitting between handlers and repositories.
//!
//! Every mutation of a specific list or item runs a per-request ownership
//! query before touching the row. There is deliberately no ownership caching:
//! a failed check is reported as "not found" so the API never reveals which
//! ids exist for other users.

pub mod auth_service;
pub mod item_service;
pub mod list_service;

use std::collections::HashMap;
use thiserror::Error;

use crate::repository::RepositoryError;

pub use auth_service::AuthService;
pub use item_service::ItemService;
pub use list_service::ListService;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("update request has no values")]
    EmptyUpdate,

    #[error("incorrect email or password")]
    InvalidCredentials,

    #[error("an account with this email already exists")]
    EmailTaken,

    #[error("invalid input body")]
    Validation { field_errors: HashMap<String, String> },

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("token error: {0}")]
    Token(String),
}

impl From<HashMap<String, String>> for ServiceError {
    fn from(field_errors: HashMap<String, String>) -> Self {
        ServiceError::Validation { field_errors }
    }
}
