use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bcrypt::DEFAULT_COST;
use serde_json::Value;

use crate::auth;
use crate::config;
use crate::database::users;
use crate::error::ApiError;
use crate::validate;
use crate::AppState;

/// POST /signup - create a user and answer with a raw token string.
///
/// The password is hashed before it is stored. A duplicate username surfaces
/// the database's unique violation as a 411 with a text body.
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<String, ApiError> {
    let input = validate::signup_input(body)
        .map_err(|_| ApiError::invalid_input(StatusCode::LENGTH_REQUIRED, "Input not correct"))?;

    let hash = bcrypt::hash(&input.password, DEFAULT_COST)?;

    let user = users::create(&state.pool, &input.username, &hash, input.name.as_deref())
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => ApiError::UsernameTaken,
            other => ApiError::Database(other),
        })?;

    tracing::info!(user = user.id, "user signed up");

    Ok(auth::sign_token(user.id, &config::config().jwt_secret)?)
}

/// POST /signin - look up the user and answer with a raw token string.
///
/// An unknown username and a wrong password produce the same response.
pub async fn signin(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<String, ApiError> {
    let input = validate::signin_input(body)
        .map_err(|_| ApiError::invalid_input(StatusCode::FORBIDDEN, "Unauthorized Request!"))?;

    let user = users::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or(ApiError::BadCredentials)?;

    if !bcrypt::verify(&input.password, &user.password)? {
        return Err(ApiError::BadCredentials);
    }

    tracing::info!(user = user.id, "user signed in");

    Ok(auth::sign_token(user.id, &config::config().jwt_secret)?)
}
