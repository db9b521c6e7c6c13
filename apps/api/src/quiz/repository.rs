use sqlx::types::Json;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::matching::{CareerMatch, QuizAnswer};
use crate::models::quiz::{CareerQuizRow, QuizResultRow};

pub async fn list_quizzes(pool: &PgPool) -> Result<Vec<CareerQuizRow>, AppError> {
    let quizzes = sqlx::query_as::<_, CareerQuizRow>(
        "SELECT id, title, description, questions, created_at FROM career_quizzes ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(quizzes)
}

pub async fn get_quiz(pool: &PgPool, id: i32) -> Result<Option<CareerQuizRow>, AppError> {
    let quiz = sqlx::query_as::<_, CareerQuizRow>(
        "SELECT id, title, description, questions, created_at FROM career_quizzes WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(quiz)
}

pub async fn save_quiz_result(
    pool: &PgPool,
    user_id: i32,
    quiz_id: i32,
    answers: &[QuizAnswer],
    matches: &[CareerMatch],
) -> Result<QuizResultRow, AppError> {
    let row = sqlx::query_as::<_, QuizResultRow>(
        r#"
        INSERT INTO quiz_results (user_id, quiz_id, answers, career_matches)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, quiz_id, answers, career_matches, taken_at
        "#,
    )
    .bind(user_id)
    .bind(quiz_id)
    .bind(Json(answers))
    .bind(Json(matches))
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Newest first.
pub async fn get_user_quiz_results(
    pool: &PgPool,
    user_id: i32,
) -> Result<Vec<QuizResultRow>, AppError> {
    let rows = sqlx::query_as::<_, QuizResultRow>(
        r#"
        SELECT id, user_id, quiz_id, answers, career_matches, taken_at
        FROM quiz_results
        WHERE user_id = $1
        ORDER BY taken_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_quiz_result(pool: &PgPool, id: i32) -> Result<Option<QuizResultRow>, AppError> {
    let row = sqlx::query_as::<_, QuizResultRow>(
        "SELECT id, user_id, quiz_id, answers, career_matches, taken_at FROM quiz_results WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
