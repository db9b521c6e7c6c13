//! Opaque bearer-token sessions stored in Redis as `session:<token>` → user id.

use redis::Client as RedisClient;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;

const SESSION_PREFIX: &str = "session:";

pub fn session_key(token: &str) -> String {
    format!("{SESSION_PREFIX}{token}")
}

pub fn new_token() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Issues a new token for `user_id` that expires after `ttl_secs`.
pub async fn create_session(
    redis: &RedisClient,
    user_id: i32,
    ttl_secs: u64,
) -> Result<String, AppError> {
    let token = new_token();
    let mut conn = redis.get_multiplexed_async_connection().await?;
    redis::cmd("SET")
        .arg(session_key(&token))
        .arg(user_id)
        .arg("EX")
        .arg(ttl_secs)
        .query_async::<_, ()>(&mut conn)
        .await?;
    debug!("Session created for user {user_id}");
    Ok(token)
}

/// Resolves a token to its user id, or `None` if it expired or never existed.
pub async fn lookup_session(redis: &RedisClient, token: &str) -> Result<Option<i32>, AppError> {
    let mut conn = redis.get_multiplexed_async_connection().await?;
    let user_id = redis::cmd("GET")
        .arg(session_key(token))
        .query_async::<_, Option<i32>>(&mut conn)
        .await?;
    Ok(user_id)
}

pub async fn delete_session(redis: &RedisClient, token: &str) -> Result<(), AppError> {
    let mut conn = redis.get_multiplexed_async_connection().await?;
    redis::cmd("DEL")
        .arg(session_key(token))
        .query_async::<_, ()>(&mut conn)
        .await?;
    Ok(())
}
