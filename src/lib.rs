use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod validate;

/// Shared state handed to every handler: the process-wide connection pool,
/// acquired once at startup.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(user_routes())
        .merge(blog_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn user_routes() -> Router<AppState> {
    use handlers::user;

    Router::new()
        .route("/signup", post(user::signup))
        .route("/signin", post(user::signin))
}

fn blog_routes() -> Router<AppState> {
    use handlers::blog;

    Router::new()
        .route("/blog", post(blog::create))
        .route("/blog/bulk", get(blog::bulk))
        .route("/blog/:id", get(blog::get_by_id).put(blog::update))
        // Every blog route sits behind the token guard
        .route_layer(axum::middleware::from_fn(middleware::require_auth))
}

async fn root() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    match database::health_check(&state.pool).await {
        Ok(()) => Ok(Json(json!({ "status": "ok" }))),
        Err(err) => {
            tracing::error!("health check failed: {}", err);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
