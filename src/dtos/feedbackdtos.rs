use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::feedbackmodels::{Contact, Testimonial, TestimonialWithUser};
use crate::models::zonemodel::Zone;

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct SubmitTestimonialDto {
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct ContactMessageDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

#[derive(Serialize, Deserialize, Validate)]
pub struct TestimonialQueryDto {
    /// Matches against the submitting user's name.
    pub search: Option<String>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
}

#[derive(Serialize, Deserialize, Validate)]
pub struct ContactQueryDto {
    pub search: Option<String>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TestimonialData {
    pub testimonial: Testimonial,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TestimonialResponseDto {
    pub status: String,
    pub data: TestimonialData,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TestimonialListResponseDto {
    pub status: String,
    pub testimonials: Vec<TestimonialWithUser>,
    pub results: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactListResponseDto {
    pub status: String,
    pub contacts: Vec<Contact>,
    pub results: i64,
}

/// Payload for the public landing page: latest approved testimonials
/// plus the full zone list for the complaint form.
#[derive(Debug, Serialize, Deserialize)]
pub struct HomeResponseDto {
    pub status: String,
    pub testimonials: Vec<TestimonialWithUser>,
    pub zones: Vec<Zone>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds_are_enforced() {
        let mut dto = SubmitTestimonialDto {
            content: "Quick resolution, thank you".to_string(),
            rating: 1,
        };
        assert!(dto.validate().is_ok());

        dto.rating = 5;
        assert!(dto.validate().is_ok());

        dto.rating = 0;
        assert!(dto.validate().is_err());

        dto.rating = 6;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn contact_requires_valid_email() {
        let dto = ContactMessageDto {
            name: "Ravi".to_string(),
            email: "not-an-email".to_string(),
            message: "When is garbage pickup?".to_string(),
        };
        assert!(dto.validate().is_err());
    }
}
