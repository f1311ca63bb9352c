// src/db/categories.rs

use sqlx::SqlitePool;

use crate::models::category::Category;

pub async fn list_categories(pool: &SqlitePool) -> sqlx::Result<Vec<Category>> {
    sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn get_category(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Category>> {
    sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
