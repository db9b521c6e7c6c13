use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::matching::{CareerMatch, QuizAnswer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: i32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: i32,
    pub text: String,
    pub options: Vec<QuizOption>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CareerQuizRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub questions: Json<Vec<QuizQuestion>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct QuizResultRow {
    pub id: i32,
    pub user_id: i32,
    pub quiz_id: i32,
    pub answers: Json<Vec<QuizAnswer>>,
    pub career_matches: Json<Vec<CareerMatch>>,
    pub taken_at: DateTime<Utc>,
}
