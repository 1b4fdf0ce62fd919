use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// bcrypt hash, never the raw password. Excluded from serialization.
    #[serde(skip_serializing)]
    pub password: String,
    pub name: Option<String>,
}
