use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::{ListRepository, RepositoryError};
use crate::database::models::TodoList;
use crate::types::{CreateList, UpdateList};

pub struct PgListRepository {
    pool: PgPool,
}

impl PgListRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListRepository for PgListRepository {
    async fn create(&self, user_id: i64, list: &CreateList) -> Result<i64, RepositoryError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO todo_lists (user_id, title, description, completion_date) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(user_id)
        .bind(&list.title)
        .bind(&list.description)
        .bind(list.completion_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn all_for_user(&self, user_id: i64) -> Result<Vec<TodoList>, RepositoryError> {
        let lists = sqlx::query_as::<_, TodoList>(
            "SELECT id, user_id, title, description, completion_date \
             FROM todo_lists WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lists)
    }

    async fn by_id(&self, user_id: i64, list_id: i64) -> Result<Option<TodoList>, RepositoryError> {
        let list = sqlx::query_as::<_, TodoList>(
            "SELECT id, user_id, title, description, completion_date \
             FROM todo_lists WHERE user_id = $1 AND id = $2",
        )
        .bind(user_id)
        .bind(list_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(list)
    }

    async fn owned_by(&self, user_id: i64, list_id: i64) -> Result<bool, RepositoryError> {
        let owned = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM todo_lists WHERE id = $1 AND user_id = $2)",
        )
        .bind(list_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(owned)
    }

    async fn update(&self, list_id: i64, update: &UpdateList) -> Result<(), RepositoryError> {
        // Callers guarantee at least one field is present.
        let mut query = QueryBuilder::<Postgres>::new("UPDATE todo_lists SET ");
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

        query.push(" WHERE id = ").push_bind(list_id);
        query.build().execute(&self.pool).await?;

        Ok(())
    }

    async fn delete(&self, list_id: i64) -> Result<(), RepositoryError> {
        // Items go with their list, in one transaction.
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM todo_items WHERE list_id = $1")
            .bind(list_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM todo_lists WHERE id = $1")
            .bind(list_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
