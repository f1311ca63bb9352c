// src/handlers/categories.rs

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{
    db,
    error::AppError,
    models::{
        category::{CategoriesResponse, to_category_map},
        question::CategoryQuestionsResponse,
    },
    pagination::{Page, paginate},
};

/// Lists every category as an id -> type map.
pub async fn list_categories(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let categories = db::categories::list_categories(&pool).await.map_err(|e| {
        tracing::error!("Failed to list categories: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(CategoriesResponse {
        categories: to_category_map(categories),
    }))
}

/// Lists one page of the questions in a category.
///
/// Only an unknown category is a 404; an empty page is returned as-is.
pub async fn list_questions_by_category(
    State(pool): State<SqlitePool>,
    Page(page): Page,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let category = db::categories::get_category(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;

    let questions = db::questions::list_questions_by_category(&pool, id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch questions for category {}: {:?}", id, e);
            AppError::InternalServerError(e.to_string())
        })?;

    let total_questions = questions.len();

    Ok(Json(CategoryQuestionsResponse {
        questions: paginate(page, questions),
        total_questions,
        category: category.category_type,
    }))
}
