// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;

use super::question::Question;

/// Category id meaning "draw from every category".
pub const ALL_CATEGORIES: i64 = 0;

/// DTO for requesting the next quiz question.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,

    /// Ids of questions already shown in this quiz.
    #[serde(default)]
    pub previous_questions: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub id: Option<i64>,

    /// Display label sent back by clients. Not used for selection.
    #[serde(rename = "type", default)]
    pub category_type: Option<String>,
}

impl QuizCategory {
    /// `None` when every category is eligible.
    pub fn filter(id: i64) -> Option<i64> {
        (id != ALL_CATEGORIES).then_some(id)
    }
}

/// Response for `POST /quizzes`. `question` is `null` once the quiz is exhausted.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub question: Option<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_id_accepts_numbers_and_strings() {
        let req: QuizRequest = serde_json::from_value(json!({
            "quiz_category": {"id": "2", "type": "Art"},
            "previous_questions": [16, 17]
        }))
        .unwrap();

        assert_eq!(req.quiz_category.id, Some(2));
        assert_eq!(req.quiz_category.category_type.as_deref(), Some("Art"));
        assert_eq!(req.previous_questions, vec![16, 17]);
    }

    #[test]
    fn missing_category_id_is_none() {
        let req: QuizRequest = serde_json::from_value(json!({
            "quiz_category": {},
            "previous_questions": [20, 21]
        }))
        .unwrap();

        assert_eq!(req.quiz_category.id, None);
    }

    #[test]
    fn previous_questions_default_to_empty() {
        let req: QuizRequest =
            serde_json::from_value(json!({"quiz_category": {"id": 0, "type": "click"}})).unwrap();

        assert!(req.previous_questions.is_empty());
        assert_eq!(QuizCategory::filter(0), None);
        assert_eq!(QuizCategory::filter(3), Some(3));
    }

    #[test]
    fn missing_quiz_category_is_rejected() {
        assert!(serde_json::from_value::<QuizRequest>(json!({"previous_questions": []})).is_err());
    }

    #[test]
    fn exhausted_quiz_serializes_null_question() {
        assert_eq!(
            serde_json::to_value(QuizResponse { question: None }).unwrap(),
            json!({"question": null})
        );
    }
}
