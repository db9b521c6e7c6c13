use std::sync::Arc;

use redis::Client as RedisClient;
use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::ChatModel;
use crate::matching::QuizRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Session store. Tokens map to user ids with a TTL.
    pub redis: RedisClient,
    /// Default: `LlmClient`. Tests swap in a canned model.
    pub llm: Arc<dyn ChatModel>,
    pub config: Config,
    /// Validated scoring tables, read-only for the life of the process.
    pub quizzes: Arc<QuizRegistry>,
}
