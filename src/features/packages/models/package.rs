use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a package
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Package {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
