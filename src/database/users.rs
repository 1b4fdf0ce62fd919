use sqlx::PgPool;

use crate::database::models::User;

/// Insert a new user. The password arrives already hashed.
///
/// A duplicate username surfaces as a database unique-violation error for
/// the caller to map; uniqueness is enforced by the constraint, not here.
pub async fn create(
    pool: &PgPool,
    username: &str,
    password: &str,
    name: Option<&str>,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (username, password, name) VALUES ($1, $2, $3) \
         RETURNING id, username, password, name",
    )
    .bind(username)
    .bind(password)
    .bind(name)
    .fetch_one(pool)
    .await
}

pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, username, password, name FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}
