use serde::Serialize;
use sqlx::FromRow;

/// Wire field names are camelCase (`authorId`), matching the API contract.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author_id: i32,
}
