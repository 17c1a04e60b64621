use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::complaintmodel::{
    Complaint, ComplaintAssignment, ComplaintStatus, ComplaintWithOfficer,
};

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct LodgeComplaintDto {
    pub zone_id: Option<Uuid>,

    #[validate(
        length(min = 1, message = "Title is required"),
        length(max = 255, message = "Title must not be more than 255 characters")
    )]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    /// Optional base64-encoded photo, with or without a data URL prefix.
    pub photo: Option<String>,

    #[validate(
        length(min = 1, message = "Location is required"),
        length(max = 255, message = "Location must not be more than 255 characters")
    )]
    pub location: String,

    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct AssignOfficerDto {
    pub officer_id: Uuid,
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct UpdateComplaintStatusDto {
    pub status: ComplaintStatus,
}

#[derive(Serialize, Deserialize, Validate)]
pub struct ComplaintQueryDto {
    pub q: Option<String>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
}

#[derive(Serialize, Deserialize, Validate)]
pub struct AssignedComplaintQueryDto {
    pub q: Option<String>,
    pub status: Option<ComplaintStatus>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ComplaintData {
    pub complaint: Complaint,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ComplaintResponseDto {
    pub status: String,
    pub data: ComplaintData,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ComplaintListResponseDto {
    pub status: String,
    pub complaints: Vec<Complaint>,
    pub results: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminComplaintListResponseDto {
    pub status: String,
    pub complaints: Vec<ComplaintWithOfficer>,
    pub results: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssignmentData {
    pub assignment: ComplaintAssignment,
    pub complaint: Complaint,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssignmentResponseDto {
    pub status: String,
    pub data: AssignmentData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lodge_dto_requires_title_and_location() {
        let dto = LodgeComplaintDto {
            zone_id: None,
            title: String::new(),
            description: "Streetlight out for a week".to_string(),
            photo: None,
            location: "MG Road".to_string(),
            latitude: 12.97,
            longitude: 77.59,
        };
        assert!(dto.validate().is_err());

        let dto = LodgeComplaintDto {
            title: "Broken streetlight".to_string(),
            location: String::new(),
            ..dto
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn complete_lodge_dto_passes() {
        let dto = LodgeComplaintDto {
            zone_id: Some(Uuid::new_v4()),
            title: "Broken streetlight".to_string(),
            description: "Streetlight out for a week".to_string(),
            photo: None,
            location: "MG Road".to_string(),
            latitude: 12.97,
            longitude: 77.59,
        };
        assert!(dto.validate().is_ok());
    }
}
