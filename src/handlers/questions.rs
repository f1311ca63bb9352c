// src/handlers/questions.rs

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection, rejection::PathRejection},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    db,
    error::AppError,
    models::{
        category::to_category_map,
        question::{
            CreateQuestionRequest, Question, QuestionListResponse, QuestionPageResponse,
            SearchQuestionsRequest, SearchQuestionsResponse,
        },
    },
    pagination::{Page, paginate},
};

/// Category whose type is reported as `currentCategory` by the listing.
const DEFAULT_CATEGORY_ID: i64 = 1;

/// Lists one page of all questions, ordered by id.
///
/// Also returns the full category map. An empty page is a 404, whether the
/// table is empty or the page is past the end.
pub async fn list_questions(
    State(pool): State<SqlitePool>,
    Page(page): Page,
) -> Result<impl IntoResponse, AppError> {
    let questions = db::questions::list_questions(&pool).await.map_err(|e| {
        tracing::error!("Failed to list questions: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    let total_questions = questions.len();
    let questions = paginate(page, questions);

    if questions.is_empty() {
        return Err(AppError::NotFound(format!("Page {} has no questions", page)));
    }

    let categories = to_category_map(db::categories::list_categories(&pool).await?);

    let current_category = categories
        .get(&DEFAULT_CATEGORY_ID)
        .cloned()
        .ok_or_else(|| {
            AppError::InternalServerError(format!(
                "Default category {} is missing",
                DEFAULT_CATEGORY_ID
            ))
        })?;

    Ok(Json(QuestionListResponse {
        questions,
        total_questions,
        categories,
        current_category,
    }))
}

/// Deletes a question and returns the refreshed page.
///
/// Every failure, an unknown id included, is reported as 422.
pub async fn delete_question(
    State(pool): State<SqlitePool>,
    Page(page): Page,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let questions = remove_question(&pool, id).await.map_err(|e| {
        tracing::warn!("Failed to delete question {}: {}", id, e);
        AppError::Unprocessable(e.to_string())
    })?;

    tracing::info!("Deleted question {}", id);

    let total_questions = questions.len();

    Ok(Json(QuestionPageResponse {
        questions: paginate(page, questions),
        total_questions,
    }))
}

async fn remove_question(pool: &SqlitePool, id: i64) -> Result<Vec<Question>, AppError> {
    db::questions::get_question(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Question {} not found", id)))?;

    db::questions::delete_question(pool, id).await?;

    Ok(db::questions::list_questions(pool).await?)
}

/// Shared endpoint for creating and searching questions.
///
/// A non-null `searchTerm` selects the search branch, whose failures are 400.
/// Anything else is treated as a create request, whose failures are 422.
pub async fn create_or_search_questions(
    State(pool): State<SqlitePool>,
    Page(page): Page,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(body) = payload?;

    let is_search = body.get("searchTerm").is_some_and(|term| !term.is_null());

    if is_search {
        let response = search_questions(&pool, page, body)
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        Ok(Json(response).into_response())
    } else {
        let response = create_question(&pool, page, body).await.map_err(|e| {
            tracing::warn!("Failed to create question: {}", e);
            AppError::Unprocessable(e.to_string())
        })?;
        Ok(Json(response).into_response())
    }
}

/// `currentCategory` is the category of the first question on the page, so a
/// page without results fails.
async fn search_questions(
    pool: &SqlitePool,
    page: usize,
    body: Value,
) -> Result<SearchQuestionsResponse, AppError> {
    let req: SearchQuestionsRequest = serde_json::from_value(body)?;

    let matches = db::questions::search_questions(pool, &req.search_term).await?;
    let total_questions = matches.len();
    let questions = paginate(page, matches);

    let first = questions.first().ok_or_else(|| {
        AppError::BadRequest(format!(
            "No questions match '{}' on page {}",
            req.search_term, page
        ))
    })?;

    let current_category = db::categories::get_category(pool, first.category)
        .await?
        .ok_or_else(|| AppError::BadRequest(format!("Category {} not found", first.category)))?;

    Ok(SearchQuestionsResponse {
        questions,
        total_questions,
        current_category: current_category.category_type,
    })
}

async fn create_question(
    pool: &SqlitePool,
    page: usize,
    body: Value,
) -> Result<QuestionPageResponse, AppError> {
    let req: CreateQuestionRequest = serde_json::from_value(body)
        .map_err(|e| AppError::Unprocessable(e.to_string()))?;

    if let Err(validation_errors) = req.validate() {
        return Err(AppError::Unprocessable(validation_errors.to_string()));
    }

    let id = db::questions::create_question(pool, &req).await?;
    tracing::info!("Created question {}", id);

    let questions = db::questions::list_questions(pool).await?;
    let total_questions = questions.len();

    Ok(QuestionPageResponse {
        questions: paginate(page, questions),
        total_questions,
    })
}
