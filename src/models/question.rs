// src/models/question.rs

use serde::{Deserialize, Deserializer, Serialize, de};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'questions' table in the database.
/// Serializes to the wire shape `{id, question, answer, category, difficulty}`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Question {
    pub id: i64,

    /// The text of the question.
    pub question: String,

    pub answer: String,

    /// Raw category id. Not resolved to the category's type.
    pub category: i64,

    /// 1 to 5 by convention; never validated.
    pub difficulty: i64,
}

/// DTO for creating a new question.
/// `difficulty` and `category` accept integers, integer strings, or floats
/// (truncated toward zero).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(custom(function = validate_not_blank))]
    pub question: String,
    #[validate(custom(function = validate_not_blank))]
    pub answer: String,
    #[serde(deserialize_with = "deserialize_integer")]
    pub difficulty: i64,
    #[serde(deserialize_with = "deserialize_integer")]
    pub category: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntegerLike {
    Integer(i64),
    Float(f64),
    Text(String),
}

fn deserialize_integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match IntegerLike::deserialize(deserializer)? {
        IntegerLike::Integer(n) => Ok(n),
        IntegerLike::Float(f) if f.is_finite() && f.abs() < i64::MAX as f64 => {
            Ok(f.trunc() as i64)
        }
        IntegerLike::Float(f) => Err(de::Error::custom(format!("{} is not an integer", f))),
        IntegerLike::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| de::Error::custom(format!("'{}' is not an integer: {}", s, e))),
    }
}

fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("cannot_be_blank"));
    }
    Ok(())
}

/// DTO for the search branch of `POST /questions`.
#[derive(Debug, Deserialize)]
pub struct SearchQuestionsRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Response for `GET /questions`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: super::category::CategoryMap,
    pub current_category: String,
}

/// Response for question mutations (create and delete).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPageResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Response for the search branch of `POST /questions`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuestionsResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

/// Response for `GET /categories/{id}/questions`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuestionsResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// The category's type string.
    pub category: String,
}
