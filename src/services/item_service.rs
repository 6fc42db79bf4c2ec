use std::sync::Arc;

use super::ServiceError;
use crate::database::models::TodoItem;
use crate::repository::{ItemRepository, ListRepository};
use crate::types::{CreateItem, UpdateItem};

/// Item operations. Holds the list repository as well, since creating or
/// listing items requires proving ownership of the parent list first.
#[derive(Clone)]
pub struct ItemService {
    items: Arc<dyn ItemRepository>,
    lists: Arc<dyn ListRepository>,
}

impl ItemService {
    pub fn new(items: Arc<dyn ItemRepository>, lists: Arc<dyn ListRepository>) -> Self {
        Self { items, lists }
    }

    pub async fn create(&self, user_id: i64, list_id: i64, req: CreateItem) -> Result<i64, ServiceError> {
        self.ensure_list_owned(user_id, list_id).await?;
        req.validate()?;
        Ok(self.items.create(list_id, &req).await?)
    }

    pub async fn get_all(&self, user_id: i64, list_id: i64) -> Result<Vec<TodoItem>, ServiceError> {
        self.ensure_list_owned(user_id, list_id).await?;
        Ok(self.items.all_in_list(list_id).await?)
    }

    pub async fn get_by_id(&self, user_id: i64, item_id: i64) -> Result<TodoItem, ServiceError> {
        self.items
            .by_id(user_id, item_id)
            .await?
            .ok_or(ServiceError::NotFound("item"))
    }

    pub async fn update(&self, user_id: i64, item_id: i64, req: UpdateItem) -> Result<(), ServiceError> {
        if req.is_empty() {
            return Err(ServiceError::EmptyUpdate);
        }
        req.validate()?;

        self.ensure_item_owned(user_id, item_id).await?;
        Ok(self.items.update(item_id, &req).await?)
    }

    pub async fn delete(&self, user_id: i64, item_id: i64) -> Result<(), ServiceError> {
        self.ensure_item_owned(user_id, item_id).await?;
        Ok(self.items.delete(item_id).await?)
    }

    async fn ensure_list_owned(&self, user_id: i64, list_id: i64) -> Result<(), ServiceError> {
        if self.lists.owned_by(user_id, list_id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound("list"))
        }
    }

    async fn ensure_item_owned(&self, user_id: i64, item_id: i64) -> Result<(), ServiceError> {
        if self.items.owned_by(user_id, item_id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound("item"))
        }
    }
}
