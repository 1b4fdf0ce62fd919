use sqlx::PgPool;

use crate::database::models::Blog;

pub async fn create(
    pool: &PgPool,
    title: &str,
    content: &str,
    author_id: i32,
) -> Result<Blog, sqlx::Error> {
    sqlx::query_as::<_, Blog>(
        "INSERT INTO blogs (title, content, author_id) VALUES ($1, $2, $3) \
         RETURNING id, title, content, author_id",
    )
    .bind(title)
    .bind(content)
    .bind(author_id)
    .fetch_one(pool)
    .await
}

/// Update title and content of the row with the given id. Errors with
/// `RowNotFound` when the id is unknown.
pub async fn update(
    pool: &PgPool,
    id: i32,
    title: &str,
    content: &str,
) -> Result<Blog, sqlx::Error> {
    sqlx::query_as::<_, Blog>(
        "UPDATE blogs SET title = $2, content = $3 WHERE id = $1 \
         RETURNING id, title, content, author_id",
    )
    .bind(id)
    .bind(title)
    .bind(content)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Blog>, sqlx::Error> {
    sqlx::query_as::<_, Blog>("SELECT id, title, content, author_id FROM blogs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Every row, unfiltered and unpaginated.
pub async fn list_all(pool: &PgPool) -> Result<Vec<Blog>, sqlx::Error> {
    sqlx::query_as::<_, Blog>("SELECT id, title, content, author_id FROM blogs ORDER BY id")
        .fetch_all(pool)
        .await
}
