use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::database::blogs;
use crate::database::models::Blog;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::validate;
use crate::AppState;

/// POST /blog - insert a blog authored by the authenticated user.
pub async fn create(
    AuthUser { id: author_id }: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let input = validate::create_blog_input(body).map_err(|_| {
        ApiError::invalid_input(StatusCode::NOT_IMPLEMENTED, "Blog is not created!")
    })?;

    let blog = blogs::create(&state.pool, &input.title, &input.content, author_id).await?;

    tracing::info!(blog = blog.id, author = author_id, "blog created");

    Ok(Json(json!({ "id": blog.id })))
}

/// PUT /blog/:id - replace title and content, answering with the full record.
///
/// Any signed-in user may edit any blog; there is no ownership check.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<Json<Blog>, ApiError> {
    let input = validate::update_blog_input(body)
        .map_err(|_| ApiError::invalid_input(StatusCode::FORBIDDEN, "Input is incorrect!"))?;

    let blog = blogs::update(&state.pool, id, &input.title, &input.content).await?;

    Ok(Json(blog))
}

/// GET /blog/bulk - every blog, unfiltered and unpaginated.
pub async fn bulk(State(state): State<AppState>) -> Result<Json<Vec<Blog>>, ApiError> {
    Ok(Json(blogs::list_all(&state.pool).await?))
}

/// GET /blog/:id - the record, or a JSON `null` body for an unknown id.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Option<Blog>>, ApiError> {
    Ok(Json(blogs::find_by_id(&state.pool, id).await?))
}
