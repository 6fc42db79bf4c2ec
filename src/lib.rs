pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod repository;
pub mod services;
pub mod types;

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use database::{HealthProbe, PgHealthProbe};
use middleware::jwt_auth_middleware;
use repository::{ListRepository, PgAuthRepository, PgItemRepository, PgListRepository};
use services::{AuthService, ItemService, ListService};

/// Shared handler state: one service per aggregate plus the health probe.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub lists: ListService,
    pub items: ItemService,
    pub health: Arc<dyn HealthProbe>,
}

impl AppState {
    pub fn new(
        auth: AuthService,
        lists: ListService,
        items: ItemService,
        health: Arc<dyn HealthProbe>,
    ) -> Self {
        Self {
            auth,
            lists,
            items,
            health,
        }
    }

    /// Assemble the production wiring on top of a Postgres pool.
    pub fn postgres(pool: PgPool) -> Self {
        let auth_repo = Arc::new(PgAuthRepository::new(pool.clone()));
        let list_repo: Arc<dyn ListRepository> = Arc::new(PgListRepository::new(pool.clone()));
        let item_repo = Arc::new(PgItemRepository::new(pool.clone()));

        Self::new(
            AuthService::new(auth_repo),
            ListService::new(list_repo.clone()),
            ItemService::new(item_repo, list_repo),
            Arc::new(PgHealthProbe::new(pool)),
        )
    }
}

/// Build the full router: public auth + health, JWT-guarded `/api` routes.
pub fn app(state: AppState) -> Router {
    let settings = config::config();

    let mut router = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth_routes())
        .merge(api_routes());

    if settings.server.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }
    if settings.security.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router.with_state(state)
}

fn auth_routes() -> Router<AppState> {
    use handlers::auth;

    Router::new()
        .route("/auth/sign-up", post(auth::sign_up))
        .route("/auth/sign-in", post(auth::sign_in))
}

fn api_routes() -> Router<AppState> {
    use handlers::{items, lists};

    Router::new()
        .route("/api/lists", post(lists::create_list).get(lists::get_all_lists))
        .route(
            "/api/lists/:id",
            get(lists::get_list)
                .put(lists::update_list)
                .delete(lists::delete_list),
        )
        .route(
            "/api/lists/:id/items",
            post(items::create_item).get(items::get_list_items),
        )
        .route(
            "/api/items/:id",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        // Everything under /api requires a valid bearer token
        .route_layer(axum::middleware::from_fn(jwt_auth_middleware))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Todo API",
            "version": version,
            "description": "Multi-user to-do list REST API built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "auth": "/auth/sign-up, /auth/sign-in (public - token acquisition)",
                "lists": "/api/lists[/:id] (protected)",
                "items": "/api/lists/:id/items, /api/items/:id (protected)",
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.health.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok",
                }
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string(),
                }
            })),
        ),
    }
}
