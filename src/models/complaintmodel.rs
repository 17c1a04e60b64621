use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "complaint_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Pending,
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub fn to_str(&self) -> &str {
        match self {
            ComplaintStatus::Pending => "pending",
            ComplaintStatus::InProgress => "in_progress",
            ComplaintStatus::Resolved => "resolved",
        }
    }

    /// Statuses only move forward: pending -> in_progress -> resolved.
    /// Re-submitting the current status is accepted as a no-op.
    pub fn can_transition_to(&self, next: ComplaintStatus) -> bool {
        if *self == next {
            return true;
        }
        matches!(
            (self, next),
            (ComplaintStatus::Pending, ComplaintStatus::InProgress)
                | (ComplaintStatus::InProgress, ComplaintStatus::Resolved)
        )
    }
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Complaint {
    pub id: Uuid,
    pub citizen_id: Uuid,
    pub zone_id: Option<Uuid>,
    pub title: String,
    pub description: String,
    /// Relative path of the stored photo, if one was attached.
    pub photo: Option<String>,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: ComplaintStatus,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct ComplaintAssignment {
    pub id: Uuid,
    pub complaint_id: Uuid,
    pub officer_id: Uuid,

    #[serde(rename = "assignedAt")]
    pub assigned_at: DateTime<Utc>,
}

/// Complaint row joined with citizen, zone and (optional) assigned officer,
/// as shown on the admin complaint list.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct ComplaintWithOfficer {
    pub id: Uuid,
    pub citizen_id: Uuid,
    pub citizen_name: String,
    pub zone_id: Option<Uuid>,
    pub zone_name: Option<String>,
    pub title: String,
    pub description: String,
    pub photo: Option<String>,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: ComplaintStatus,
    pub officer_id: Option<Uuid>,
    pub officer_name: Option<String>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_transitions_are_allowed() {
        assert!(ComplaintStatus::Pending.can_transition_to(ComplaintStatus::InProgress));
        assert!(ComplaintStatus::InProgress.can_transition_to(ComplaintStatus::Resolved));
    }

    #[test]
    fn self_transitions_are_noops() {
        assert!(ComplaintStatus::Pending.can_transition_to(ComplaintStatus::Pending));
        assert!(ComplaintStatus::InProgress.can_transition_to(ComplaintStatus::InProgress));
        assert!(ComplaintStatus::Resolved.can_transition_to(ComplaintStatus::Resolved));
    }

    #[test]
    fn regressions_and_skips_are_rejected() {
        assert!(!ComplaintStatus::InProgress.can_transition_to(ComplaintStatus::Pending));
        assert!(!ComplaintStatus::Resolved.can_transition_to(ComplaintStatus::InProgress));
        assert!(!ComplaintStatus::Resolved.can_transition_to(ComplaintStatus::Pending));
        assert!(!ComplaintStatus::Pending.can_transition_to(ComplaintStatus::Resolved));
    }
}
