use chrono::prelude::*;
use serde::{Deserialize, Serialize};

/// Administrative ward a complaint is filed under. Names are unique.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Zone {
    pub id: uuid::Uuid,
    pub name: String,
    pub description: Option<String>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}
