use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

/// HTTP-facing error for every handler and guard failure.
///
/// Each variant carries the exact status and body its route contract calls
/// for; internal failures collapse to a 500 with a generic message and the
/// detail goes to the log only.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed its schema check. Status and message are fixed
    /// per route.
    #[error("{message}")]
    InvalidInput {
        status: StatusCode,
        message: &'static str,
    },

    /// Missing or unverifiable bearer token on a guarded route.
    #[error("You are not logged in")]
    NotLoggedIn,

    /// Signin credentials did not match a stored user.
    #[error("Unauthorized Request!")]
    BadCredentials,

    /// Signup hit the username uniqueness constraint.
    #[error("User already exists with this username")]
    UsernameTaken,

    #[error(transparent)]
    Token(#[from] crate::auth::TokenError),

    #[error("password hashing failed")]
    Hash(#[from] bcrypt::BcryptError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn invalid_input(status: StatusCode, message: &'static str) -> Self {
        ApiError::InvalidInput { status, message }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput { status, .. } => *status,
            ApiError::NotLoggedIn | ApiError::BadCredentials => StatusCode::FORBIDDEN,
            // 411, the original signup failure status
            ApiError::UsernameTaken => StatusCode::LENGTH_REQUIRED,
            ApiError::Token(_) | ApiError::Hash(_) | ApiError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::InvalidInput { message, .. } => {
                (status, Json(json!({ "message": message }))).into_response()
            }
            ApiError::NotLoggedIn => {
                (status, Json(json!({ "message": self.to_string() }))).into_response()
            }
            // Plain-text bodies, matching the signup/signin contract.
            ApiError::BadCredentials | ApiError::UsernameTaken => {
                (status, self.to_string()).into_response()
            }
            ApiError::Token(_) | ApiError::Hash(_) | ApiError::Database(_) => {
                tracing::error!("internal error: {}", self);
                (status, Json(json!({ "message": "Internal server error" }))).into_response()
            }
        }
    }
}
