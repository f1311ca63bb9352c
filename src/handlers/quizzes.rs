// src/handlers/quizzes.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use rand::Rng;
use sqlx::SqlitePool;

use crate::{
    db,
    error::AppError,
    models::quiz::{QuizCategory, QuizRequest, QuizResponse},
};

/// Picks a random question the player has not seen yet.
///
/// * `quiz_category.id == 0` draws from every category.
/// * Counts the candidates, then fetches the one at a random offset in id order.
/// * Returns `{question: null}` once every candidate has been played.
pub async fn next_quiz_question(
    State(pool): State<SqlitePool>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, AppError> {
    let Json(req) = payload?;

    let category_id = req
        .quiz_category
        .id
        .ok_or_else(|| AppError::BadRequest("quiz_category.id is required".to_string()))?;

    tracing::debug!(
        category_id,
        category_type = ?req.quiz_category.category_type,
        previous = req.previous_questions.len(),
        "Selecting quiz question"
    );

    let category = QuizCategory::filter(category_id);

    let count = db::questions::count_quiz_candidates(&pool, category, &req.previous_questions)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count quiz candidates: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

    if count == 0 {
        return Ok(Json(QuizResponse { question: None }));
    }

    let offset = rand::thread_rng().gen_range(0..count);

    let question =
        db::questions::quiz_candidate_at(&pool, category, &req.previous_questions, offset)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch quiz question: {:?}", e);
                AppError::InternalServerError(e.to_string())
            })?;

    Ok(Json(QuizResponse { question }))
}
