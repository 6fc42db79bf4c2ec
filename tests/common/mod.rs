//! In-process test harness: the real router over in-memory repositories.

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use todo_api::database::models::{TodoItem, TodoList, User};
use todo_api::database::{DatabaseError, HealthProbe};
use todo_api::repository::{
    AuthRepository, ItemRepository, ListRepository, NewUser, RepositoryError,
};
use todo_api::services::{AuthService, ItemService, ListService};
use todo_api::AppState;

#[derive(Default)]
struct Store {
    users: Mutex<Vec<User>>,
    lists: Mutex<Vec<TodoList>>,
    items: Mutex<Vec<TodoItem>>,
    next_id: AtomicI64,
}

impl Store {
    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[derive(Clone)]
struct MemoryRepo {
    store: Arc<Store>,
}

#[async_trait]
impl AuthRepository for MemoryRepo {
    async fn create_user(&self, new_user: NewUser) -> Result<i64, RepositoryError> {
        let mut users = self.store.users.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(RepositoryError::Duplicate("email"));
        }

        let id = self.store.next_id();
        users.push(User {
            id,
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: chrono::Utc::now(),
        });
        Ok(id)
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.store.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl ListRepository for MemoryRepo {
    async fn create(
        &self,
        user_id: i64,
        list: &todo_api::types::CreateList,
    ) -> Result<i64, RepositoryError> {
        let id = self.store.next_id();
        self.store.lists.lock().unwrap().push(TodoList {
            id,
            user_id,
            title: list.title.clone(),
            description: list.description.clone(),
            completion_date: list.completion_date,
        });
        Ok(id)
    }

    async fn all_for_user(&self, user_id: i64) -> Result<Vec<TodoList>, RepositoryError> {
        let lists = self.store.lists.lock().unwrap();
        Ok(lists.iter().filter(|l| l.user_id == user_id).cloned().collect())
    }

    async fn by_id(&self, user_id: i64, list_id: i64) -> Result<Option<TodoList>, RepositoryError> {
        let lists = self.store.lists.lock().unwrap();
        Ok(lists
            .iter()
            .find(|l| l.user_id == user_id && l.id == list_id)
            .cloned())
    }

    async fn owned_by(&self, user_id: i64, list_id: i64) -> Result<bool, RepositoryError> {
        let lists = self.store.lists.lock().unwrap();
        Ok(lists.iter().any(|l| l.user_id == user_id && l.id == list_id))
    }

    async fn update(
        &self,
        list_id: i64,
        update: &todo_api::types::UpdateList,
    ) -> Result<(), RepositoryError> {
        let mut lists = self.store.lists.lock().unwrap();
        if let Some(list) = lists.iter_mut().find(|l| l.id == list_id) {
            if let Some(title) = &update.title {
                list.title = title.clone();
            }
            if let Some(description) = &update.description {
                list.description = description.clone();
            }
            if let Some(completion_date) = update.completion_date {
                list.completion_date = Some(completion_date);
            }
        }
        Ok(())
    }

    async fn delete(&self, list_id: i64) -> Result<(), RepositoryError> {
        self.store.items.lock().unwrap().retain(|i| i.list_id != list_id);
        self.store.lists.lock().unwrap().retain(|l| l.id != list_id);
        Ok(())
    }
}

#[async_trait]
impl ItemRepository for MemoryRepo {
    async fn create(
        &self,
        list_id: i64,
        item: &todo_api::types::CreateItem,
    ) -> Result<i64, RepositoryError> {
        let id = self.store.next_id();
        self.store.items.lock().unwrap().push(TodoItem {
            id,
            list_id,
            title: item.title.clone(),
            description: item.description.clone(),
            completion_date: item.completion_date,
            done: item.done,
        });
        Ok(id)
    }

    async fn all_in_list(&self, list_id: i64) -> Result<Vec<TodoItem>, RepositoryError> {
        let items = self.store.items.lock().unwrap();
        Ok(items.iter().filter(|i| i.list_id == list_id).cloned().collect())
    }

    async fn by_id(&self, user_id: i64, item_id: i64) -> Result<Option<TodoItem>, RepositoryError> {
        let item = {
            let items = self.store.items.lock().unwrap();
            items.iter().find(|i| i.id == item_id).cloned()
        };

        match item {
            Some(item) => {
                let lists = self.store.lists.lock().unwrap();
                let owned = lists
                    .iter()
                    .any(|l| l.id == item.list_id && l.user_id == user_id);
                Ok(owned.then_some(item))
            }
            None => Ok(None),
        }
    }

    async fn owned_by(&self, user_id: i64, item_id: i64) -> Result<bool, RepositoryError> {
        Ok(ItemRepository::by_id(self, user_id, item_id).await?.is_some())
    }

    async fn update(
        &self,
        item_id: i64,
        update: &todo_api::types::UpdateItem,
    ) -> Result<(), RepositoryError> {
        let mut items = self.store.items.lock().unwrap();
        if let Some(item) = items.iter_mut().find(|i| i.id == item_id) {
            if let Some(title) = &update.title {
                item.title = title.clone();
            }
            if let Some(description) = &update.description {
                item.description = description.clone();
            }
            if let Some(completion_date) = update.completion_date {
                item.completion_date = Some(completion_date);
            }
            if let Some(done) = update.done {
                item.done = done;
            }
        }
        Ok(())
    }

    async fn delete(&self, item_id: i64) -> Result<(), RepositoryError> {
        self.store.items.lock().unwrap().retain(|i| i.id != item_id);
        Ok(())
    }
}

struct AlwaysHealthy;

#[async_trait]
impl HealthProbe for AlwaysHealthy {
    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

struct DatabaseDown;

#[async_trait]
impl HealthProbe for DatabaseDown {
    async fn ping(&self) -> Result<(), DatabaseError> {
        Err(DatabaseError::ConfigMissing("DATABASE_URL"))
    }
}

/// Fresh application over an empty in-memory store.
pub fn app() -> Router {
    app_with_probe(Arc::new(AlwaysHealthy))
}

/// Same wiring, but the health probe reports the database as unreachable.
pub fn app_with_failing_database() -> Router {
    app_with_probe(Arc::new(DatabaseDown))
}

fn app_with_probe(health: Arc<dyn HealthProbe>) -> Router {
    let repo = MemoryRepo {
        store: Arc::new(Store::default()),
    };
    let auth_repo: Arc<dyn AuthRepository> = Arc::new(repo.clone());
    let list_repo: Arc<dyn ListRepository> = Arc::new(repo.clone());
    let item_repo: Arc<dyn ItemRepository> = Arc::new(repo);

    let state = AppState::new(
        AuthService::new(auth_repo),
        ListService::new(list_repo.clone()),
        ItemService::new(item_repo, list_repo),
        health,
    );

    todo_api::app(state)
}

/// Issue one request against the router, returning status and parsed body.
pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, value))
}

/// Sign up and sign in, returning a usable bearer token.
pub async fn register_user(app: &Router, name: &str, email: &str, password: &str) -> Result<String> {
    let (status, _) = request(
        app,
        Method::POST,
        "/auth/sign-up",
        None,
        Some(json!({ "name": name, "email": email, "password": password })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED, "sign-up failed");

    let (status, body) = request(
        app,
        Method::POST,
        "/auth/sign-in",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK, "sign-in failed");

    Ok(body["data"]["token"]
        .as_str()
        .expect("token in sign-in response")
        .to_string())
}

/// Create a list for the given token, returning its id.
pub async fn create_list(app: &Router, token: &str, title: &str) -> Result<i64> {
    let (status, body) = request(
        app,
        Method::POST,
        "/api/lists",
        Some(token),
        Some(json!({ "title": title })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED, "list creation failed");

    Ok(body["data"]["id"].as_i64().expect("list id"))
}
