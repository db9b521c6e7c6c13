use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::llm_client::ChatTurn;
use crate::matching::catalog::{self, CareerProfile};
use crate::matching::answers::dedup_last_wins;
use crate::matching::{CareerMatch, QuizAnswer, ScoringConfig};
use crate::models::quiz::{CareerQuizRow, QuizResultRow};
use crate::quiz::prompts::{analysis_system_prompt, build_analysis_prompt, ANALYSIS_MAX_TOKENS};
use crate::quiz::repository;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizRequest {
    pub quiz_id: i32,
    #[serde(default)]
    pub answers: Vec<QuizAnswer>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: String,
}

/// GET /api/quizzes
pub async fn handle_list_quizzes(
    State(state): State<AppState>,
) -> Result<Json<Vec<CareerQuizRow>>, AppError> {
    Ok(Json(repository::list_quizzes(&state.db).await?))
}

/// GET /api/quizzes/:id
pub async fn handle_get_quiz(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CareerQuizRow>, AppError> {
    let quiz = repository::get_quiz(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Quiz {id} not found")))?;
    Ok(Json(quiz))
}

/// Collapses repeated questions before scoring so the stored answers are exactly what was scored.
fn score_submission(
    config: &ScoringConfig,
    answers: &[QuizAnswer],
) -> (Vec<QuizAnswer>, Vec<CareerMatch>) {
    let answers = dedup_last_wins(answers);
    let matches = config.score(&answers);
    (answers, matches)
}

/// POST /api/quiz-results
///
/// Scores on the server against the built-in tables; any client-computed matches are ignored.
pub async fn handle_submit_quiz(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SubmitQuizRequest>,
) -> Result<(StatusCode, Json<QuizResultRow>), AppError> {
    let config = state
        .quizzes
        .get(req.quiz_id)
        .ok_or_else(|| AppError::NotFound(format!("Quiz {} not found", req.quiz_id)))?;

    let (answers, matches) = score_submission(config, &req.answers);
    let saved = repository::save_quiz_result(
        &state.db,
        auth.user.id,
        req.quiz_id,
        &answers,
        &matches,
    )
    .await?;

    info!(
        "Saved quiz result {} for user {} (quiz {}, top match: {})",
        saved.id,
        auth.user.id,
        req.quiz_id,
        matches
            .first()
            .map(|m| format!("{} {}%", m.career, m.match_percentage))
            .unwrap_or_else(|| "none".to_string())
    );
    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /api/user/quiz-results
pub async fn handle_user_quiz_results(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<QuizResultRow>>, AppError> {
    Ok(Json(
        repository::get_user_quiz_results(&state.db, auth.user.id).await?,
    ))
}

/// GET /api/careers/:name
pub async fn handle_get_career(
    Path(name): Path<String>,
) -> Result<Json<&'static CareerProfile>, AppError> {
    catalog::lookup(&name)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No profile for career '{name}'")))
}

/// POST /api/quiz-results/:id/analysis
pub async fn handle_analyze_result(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    body: Option<Json<AnalysisRequest>>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let req = body.map(|Json(req)| req).unwrap_or_default();

    let result = repository::get_quiz_result(&state.db, id)
        .await?
        .filter(|r| r.user_id == auth.user.id)
        .ok_or_else(|| AppError::NotFound(format!("Quiz result {id} not found")))?;

    let variant = state
        .quizzes
        .get(result.quiz_id)
        .map(|c| c.variant())
        .ok_or_else(|| AppError::NotFound(format!("Quiz {} not found", result.quiz_id)))?;

    let prompt = build_analysis_prompt(
        variant,
        &result.answers.0,
        &result.career_matches.0,
        &req.skills,
    );
    let analysis = state
        .llm
        .complete(
            &analysis_system_prompt(),
            &[ChatTurn::user(prompt)],
            ANALYSIS_MAX_TOKENS,
        )
        .await?;

    Ok(Json(AnalysisResponse { analysis }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::QuizVariant;

    #[test]
    fn test_submission_stores_deduplicated_answers() {
        let config = ScoringConfig::for_variant(QuizVariant::GeneralInterest).unwrap();
        let submitted = [
            QuizAnswer::new(1, 1),
            QuizAnswer::new(6, 5),
            QuizAnswer::new(1, 5),
        ];
        let (answers, matches) = score_submission(&config, &submitted);
        assert_eq!(answers, vec![QuizAnswer::new(1, 5), QuizAnswer::new(6, 5)]);
        assert_eq!(matches, config.score(&answers));
    }
}
