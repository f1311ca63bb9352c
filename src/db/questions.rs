// src/db/questions.rs

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::models::question::{CreateQuestionRequest, Question};

const SELECT_QUESTION: &str = "SELECT id, question, answer, category, difficulty FROM questions";

pub async fn list_questions(pool: &SqlitePool) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(&format!("{SELECT_QUESTION} ORDER BY id"))
        .fetch_all(pool)
        .await
}

pub async fn get_question(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Question>> {
    sqlx::query_as::<_, Question>(&format!("{SELECT_QUESTION} WHERE id = ?1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_questions_by_category(
    pool: &SqlitePool,
    category: i64,
) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(&format!("{SELECT_QUESTION} WHERE category = ?1 ORDER BY id"))
        .bind(category)
        .fetch_all(pool)
        .await
}

/// Case-insensitive substring match on the question text.
/// `%` and `_` in the term keep their LIKE meaning.
pub async fn search_questions(pool: &SqlitePool, term: &str) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(&format!(
        "{SELECT_QUESTION} WHERE question LIKE '%' || ?1 || '%' ORDER BY id"
    ))
    .bind(term)
    .fetch_all(pool)
    .await
}

/// Inserts a question and returns its id.
pub async fn create_question(pool: &SqlitePool, new: &CreateQuestionRequest) -> sqlx::Result<i64> {
    let id = sqlx::query(
        r#"
        INSERT INTO questions (question, answer, category, difficulty)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(&new.question)
    .bind(&new.answer)
    .bind(new.category)
    .bind(new.difficulty)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

/// Returns the number of rows removed.
pub async fn delete_question(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM questions WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Counts questions eligible for a quiz: in `category` (any when `None`) and
/// not listed in `exclude`.
pub async fn count_quiz_candidates(
    pool: &SqlitePool,
    category: Option<i64>,
    exclude: &[i64],
) -> sqlx::Result<i64> {
    let mut query_builder = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM questions");
    push_candidate_filter(&mut query_builder, category, exclude);

    query_builder
        .build_query_scalar::<i64>()
        .fetch_one(pool)
        .await
}

/// Fetches the quiz candidate at `offset` in id order.
pub async fn quiz_candidate_at(
    pool: &SqlitePool,
    category: Option<i64>,
    exclude: &[i64],
    offset: i64,
) -> sqlx::Result<Option<Question>> {
    let mut query_builder = QueryBuilder::<Sqlite>::new(SELECT_QUESTION);
    push_candidate_filter(&mut query_builder, category, exclude);
    query_builder.push(" ORDER BY id LIMIT 1 OFFSET ");
    query_builder.push_bind(offset);

    query_builder
        .build_query_as::<Question>()
        .fetch_optional(pool)
        .await
}

fn push_candidate_filter(
    query_builder: &mut QueryBuilder<'_, Sqlite>,
    category: Option<i64>,
    exclude: &[i64],
) {
    query_builder.push(" WHERE 1 = 1");

    if let Some(category) = category {
        query_builder.push(" AND category = ");
        query_builder.push_bind(category);
    }

    // Use QueryBuilder for dynamic NOT IN clause
    if !exclude.is_empty() {
        query_builder.push(" AND id NOT IN (");
        let mut separated = query_builder.separated(", ");
        for id in exclude {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, db};

    async fn seeded_pool() -> SqlitePool {
        let pool = db::connect(&Config::for_tests()).await.unwrap();
        db::migrate(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn lists_seeded_questions_in_id_order() {
        let pool = seeded_pool().await;
        let questions = list_questions(&pool).await.unwrap();

        assert_eq!(questions.len(), 19);
        assert!(questions.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn search_ignores_case() {
        let pool = seeded_pool().await;

        let upper = search_questions(&pool, "TITLE").await.unwrap();
        let lower = search_questions(&pool, "title").await.unwrap();

        assert!(!upper.is_empty());
        assert_eq!(upper, lower);
        assert!(upper.iter().all(|q| q.question.to_lowercase().contains("title")));
    }

    #[tokio::test]
    async fn create_then_delete_round_trip() {
        let pool = seeded_pool().await;
        let req = CreateQuestionRequest {
            question: "Who invented Electricity?".into(),
            answer: "Michael Faraday".into(),
            difficulty: 2,
            category: 1,
        };

        let id = create_question(&pool, &req).await.unwrap();
        let stored = get_question(&pool, id).await.unwrap().unwrap();
        assert_eq!(stored.question, req.question);
        assert_eq!(stored.category, 1);

        assert_eq!(delete_question(&pool, id).await.unwrap(), 1);
        assert!(get_question(&pool, id).await.unwrap().is_none());
        assert_eq!(delete_question(&pool, id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn quiz_candidates_respect_category_and_exclusions() {
        let pool = seeded_pool().await;

        assert_eq!(count_quiz_candidates(&pool, Some(2), &[]).await.unwrap(), 4);
        assert_eq!(
            count_quiz_candidates(&pool, Some(2), &[16, 17]).await.unwrap(),
            2
        );
        assert_eq!(count_quiz_candidates(&pool, None, &[2, 4]).await.unwrap(), 17);

        let first = quiz_candidate_at(&pool, Some(2), &[16, 17], 0)
            .await
            .unwrap()
            .unwrap();
        let second = quiz_candidate_at(&pool, Some(2), &[16, 17], 1)
            .await
            .unwrap()
            .unwrap();
        assert_eq!((first.id, second.id), (18, 19));

        assert!(
            quiz_candidate_at(&pool, Some(2), &[16, 17], 2)
                .await
                .unwrap()
                .is_none()
        );
    }
}
