use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Region model. `parent_id` is `None` for top-level regions (시/도).
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Region {
    pub id: i32,
    pub name: String,
    pub parent_id: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
