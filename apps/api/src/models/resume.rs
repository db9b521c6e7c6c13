use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ResumeTemplateRow {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Markdown skeleton with `{{placeholder}}` slots.
    pub template: String,
}
