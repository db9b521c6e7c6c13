use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::llm_client::{ChatTurn, DEFAULT_MAX_TOKENS};
use crate::models::resume::ResumeTemplateRow;
use crate::resume::prompts::{build_feedback_prompt, feedback_system_prompt};
use crate::resume::tips::{ResumeGuidance, GUIDANCE};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeFeedbackRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct ResumeFeedbackResponse {
    pub feedback: String,
}

/// GET /api/resume-templates
pub async fn handle_list_templates(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeTemplateRow>>, AppError> {
    let templates = sqlx::query_as::<_, ResumeTemplateRow>(
        "SELECT id, name, description, template FROM resume_templates ORDER BY id",
    )
    .fetch_all(&state.db)
    .await?;
    Ok(Json(templates))
}

/// GET /api/resume-templates/:id
pub async fn handle_get_template(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ResumeTemplateRow>, AppError> {
    let template: Option<ResumeTemplateRow> = sqlx::query_as(
        "SELECT id, name, description, template FROM resume_templates WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&state.db)
    .await?;

    let template =
        template.ok_or_else(|| AppError::NotFound(format!("Resume template {id} not found")))?;
    Ok(Json(template))
}

/// GET /api/resume-tips
pub async fn handle_resume_tips() -> Json<ResumeGuidance> {
    Json(GUIDANCE)
}

/// POST /api/resume-feedback
pub async fn handle_resume_feedback(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<ResumeFeedbackRequest>,
) -> Result<Json<ResumeFeedbackResponse>, AppError> {
    let resume_text = req.resume_text.trim();
    if resume_text.is_empty() {
        return Err(AppError::Validation("Resume text must not be blank".into()));
    }
    let feedback = state
        .llm
        .complete(
            &feedback_system_prompt(),
            &[ChatTurn::user(build_feedback_prompt(resume_text))],
            DEFAULT_MAX_TOKENS,
        )
        .await?;
    Ok(Json(ResumeFeedbackResponse { feedback }))
}
