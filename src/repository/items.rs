use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::{ItemRepository, RepositoryError};
use crate::database::models::TodoItem;
use crate::types::{CreateItem, UpdateItem};

pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn create(&self, list_id: i64, item: &CreateItem) -> Result<i64, RepositoryError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO todo_items (list_id, title, description, completion_date, done) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(list_id)
        .bind(&item.title)
        .bind(&item.description)
        .bind(item.completion_date)
        .bind(item.done)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn all_in_list(&self, list_id: i64) -> Result<Vec<TodoItem>, RepositoryError> {
        let items = sqlx::query_as::<_, TodoItem>(
            "SELECT id, list_id, title, description, completion_date, done \
             FROM todo_items WHERE list_id = $1 ORDER BY id",
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn by_id(&self, user_id: i64, item_id: i64) -> Result<Option<TodoItem>, RepositoryError> {
        let item = sqlx::query_as::<_, TodoItem>(
            "SELECT ti.id, ti.list_id, ti.title, ti.description, ti.completion_date, ti.done \
             FROM todo_items ti \
             INNER JOIN todo_lists tl ON ti.list_id = tl.id \
             WHERE tl.user_id = $1 AND ti.id = $2",
        )
        .bind(user_id)
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn owned_by(&self, user_id: i64, item_id: i64) -> Result<bool, RepositoryError> {
        let owned = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(\
                SELECT 1 FROM todo_items ti \
                INNER JOIN todo_lists tl ON ti.list_id = tl.id \
                WHERE ti.id = $1 AND tl.user_id = $2)",
        )
        .bind(item_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(owned)
    }

    async fn update(&self, item_id: i64, update: &UpdateItem) -> Result<(), RepositoryError> {
        let mut query = QueryBuilder::<Postgres>::new("UPDATE todo_items SET ");
        let mut assignments = query.separated(", ");

        if let Some(title) = &update.title {
            assignments.push("title = ").push_bind_unseparated(title);
        }
        if let Some(description) = &update.description {
            assignments.push("description = ").push_bind_unseparated(description);
        }
        if let Some(completion_date) = update.completion_date {
            assignments
                .push("completion_date = ")
                .push_bind_unseparated(completion_date);
        }
        if let Some(done) = update.done {
            assignments.push("done = ").push_bind_unseparated(done);
        }

        query.push(" WHERE id = ").push_bind(item_id);
        query.build().execute(&self.pool).await?;

        Ok(())
    }

    async fn delete(&self, item_id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM todo_items WHERE id = $1")
            .bind(item_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
