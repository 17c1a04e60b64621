use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Citizen feedback shown on the public landing page once approved.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Testimonial {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    /// 1 (worst) to 5 (best).
    pub rating: i32,
    pub is_approved: bool,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct TestimonialWithUser {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub content: String,
    pub rating: i32,
    pub is_approved: bool,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,

    #[serde(rename = "submittedAt")]
    pub submitted_at: DateTime<Utc>,
}
