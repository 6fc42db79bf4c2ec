use std::sync::Arc;

use super::ServiceError;
use crate::database::models::TodoList;
use crate::repository::ListRepository;
use crate::types::{CreateList, UpdateList};

#[derive(Clone)]
pub struct ListService {
    repo: Arc<dyn ListRepository>,
}

impl ListService {
    pub fn new(repo: Arc<dyn ListRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, user_id: i64, req: CreateList) -> Result<i64, ServiceError> {
        req.validate()?;
        Ok(self.repo.create(user_id, &req).await?)
    }

    pub async fn get_all(&self, user_id: i64) -> Result<Vec<TodoList>, ServiceError> {
        Ok(self.repo.all_for_user(user_id).await?)
    }

    pub async fn get_by_id(&self, user_id: i64, list_id: i64) -> Result<TodoList, ServiceError> {
        self.repo
            .by_id(user_id, list_id)
            .await?
            .ok_or(ServiceError::NotFound("list"))
    }

    pub async fn update(&self, user_id: i64, list_id: i64, req: UpdateList) -> Result<(), ServiceError> {
        if req.is_empty() {
            return Err(ServiceError::EmptyUpdate);
        }
        req.validate()?;

        self.ensure_owned(user_id, list_id).await?;
        Ok(self.repo.update(list_id, &req).await?)
    }

    pub async fn delete(&self, user_id: i64, list_id: i64) -> Result<(), ServiceError> {
        self.ensure_owned(user_id, list_id).await?;
        Ok(self.repo.delete(list_id).await?)
    }

    async fn ensure_owned(&self, user_id: i64, list_id: i64) -> Result<(), ServiceError> {
        if self.repo.owned_by(user_id, list_id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound("list"))
        }
    }
}
