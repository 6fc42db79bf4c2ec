use std::sync::Arc;

use super::ServiceError;
use crate::auth::{self, password, Claims};
use crate::config;
use crate::repository::{AuthRepository, NewUser, RepositoryError};
use crate::types::{SignInRequest, SignUpRequest};

/// Account creation and credential verification.
#[derive(Clone)]
pub struct AuthService {
    repo: Arc<dyn AuthRepository>,
}

impl AuthService {
    pub fn new(repo: Arc<dyn AuthRepository>) -> Self {
        Self { repo }
    }

    pub async fn sign_up(&self, req: SignUpRequest) -> Result<i64, ServiceError> {
        req.validate()?;

        let security = &config::config().security;
        let new_user = NewUser {
            name: req.name,
            email: req.email,
            password_hash: password::hash_password(&req.password, &security.password_salt),
        };

        match self.repo.create_user(new_user).await {
            Ok(id) => Ok(id),
            Err(RepositoryError::Duplicate(_)) => Err(ServiceError::EmailTaken),
            Err(e) => Err(e.into()),
        }
    }

    /// Verify credentials and issue a bearer token.
    pub async fn sign_in(&self, req: SignInRequest) -> Result<String, ServiceError> {
        req.validate()?;

        let security = &config::config().security;
        let user = self
            .repo
            .user_by_email(&req.email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        if !password::verify_password(&user.password_hash, &req.password, &security.password_salt) {
            return Err(ServiceError::InvalidCredentials);
        }

        auth::generate_jwt(&Claims::new(user.id), &security.jwt_secret)
            .map_err(|e| ServiceError::Token(e.to_string()))
    }
}
