use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::complaintmodel::ComplaintStatus;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct StatusCount {
    pub status: ComplaintStatus,
    pub count: i64,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct ZoneCount {
    /// None for complaints whose zone was deleted.
    pub zone_name: Option<String>,
    pub count: i64,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct MonthlyCount {
    pub month: DateTime<Utc>,
    pub count: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ComplaintAnalyticsResponseDto {
    pub status: String,
    pub complaint_status_counts: Vec<StatusCount>,
    pub complaint_zone_counts: Vec<ZoneCount>,
    pub monthly_complaints: Vec<MonthlyCount>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardAnalyticsResponseDto {
    pub status: String,
    pub total_complaints: i64,
    pub complaints_by_status: Vec<StatusCount>,
    pub complaints_assigned: i64,
    pub avg_rating: Option<f64>,
    pub complaints_by_zone: Vec<ZoneCount>,
    pub complaints_by_month: i64,
}

/// Role-scoped summary behind the post-login dashboard: citizens see their
/// own complaints, officers the ones assigned to them, admins everything.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserDashboardResponseDto {
    pub status: String,
    pub role: String,
    pub complaint_status_counts: Vec<StatusCount>,
}
