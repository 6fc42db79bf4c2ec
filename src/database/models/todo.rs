use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named collection of items owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TodoList {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub completion_date: Option<NaiveDate>,
}

/// A task belonging to exactly one list.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TodoItem {
    pub id: i64,
    pub list_id: i64,
    pub title: String,
    pub description: String,
    pub completion_date: Option<NaiveDate>,
    pub done: bool,
}
