use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::usermodel::{User, UserRole};

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,

    #[validate(custom = "validate_phone")]
    pub phone: String,

    #[validate(custom = "validate_aadhaar")]
    pub aadhaar: String,

    pub role: UserRole,

    #[validate(
        length(min = 1, message = "Password is required"),
        length(min = 8, message = "Password must be at least 8 characters")
    )]
    pub password: String,

    #[validate(
        length(min = 1, message = "Confirm Password is required"),
        must_match(other = "password", message = "Passwords do not match")
    )]
    #[serde(rename = "passwordConfirm")]
    pub password_confirm: String,
}

pub fn validate_phone(phone: &str) -> Result<(), validator::ValidationError> {
    if phone.len() != 10 || !phone.chars().all(|c| c.is_ascii_digit()) {
        let mut err = validator::ValidationError::new("invalid_phone");
        err.message = Some("Enter a valid 10-digit phone number".into());
        return Err(err);
    }
    Ok(())
}

pub fn validate_aadhaar(aadhaar: &str) -> Result<(), validator::ValidationError> {
    if aadhaar.len() != 12 || !aadhaar.chars().all(|c| c.is_ascii_digit()) {
        let mut err = validator::ValidationError::new("invalid_aadhaar");
        err.message = Some("Enter a valid 12-digit Aadhaar number".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct LoginUserDto {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct ProfileUpdateDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(custom = "validate_phone")]
    pub phone: String,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct UserPasswordUpdateDto {
    #[validate(
        length(min = 1, message = "New password is required."),
        length(min = 8, message = "New password must be at least 8 characters")
    )]
    pub new_password: String,

    #[validate(
        length(min = 1, message = "New password confirm is required."),
        must_match(other = "new_password", message = "New passwords do not match")
    )]
    pub new_password_confirm: String,

    #[validate(length(min = 1, message = "Old password is required."))]
    pub old_password: String,
}

#[derive(Serialize, Deserialize, Validate)]
pub struct UserQueryDto {
    pub search: Option<String>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FilterUserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub aadhaar: String,
    pub role: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl FilterUserDto {
    pub fn filter_user(user: &User) -> Self {
        FilterUserDto {
            id: user.id.to_string(),
            name: user.name.to_owned(),
            email: user.email.to_owned(),
            phone: user.phone.to_owned(),
            aadhaar: user.aadhaar.to_owned(),
            role: user.role.to_str().to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }

    pub fn filter_users(users: &[User]) -> Vec<FilterUserDto> {
        users.iter().map(FilterUserDto::filter_user).collect()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserData {
    pub user: FilterUserDto,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponseDto {
    pub status: String,
    pub data: UserData,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserListResponseDto {
    pub status: String,
    pub users: Vec<FilterUserDto>,
    pub results: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserLoginResponseDto {
    pub status: String,
    pub token: String,
}

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub status: &'static str,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_dto() -> RegisterUserDto {
        RegisterUserDto {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            aadhaar: "123456789012".to_string(),
            role: UserRole::Citizen,
            password: "password123".to_string(),
            password_confirm: "password123".to_string(),
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert!(register_dto().validate().is_ok());
    }

    #[test]
    fn phone_must_be_ten_digits() {
        let mut dto = register_dto();
        dto.phone = "12345".to_string();
        assert!(dto.validate().is_err());

        dto.phone = "98765abcde".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn aadhaar_must_be_twelve_digits() {
        let mut dto = register_dto();
        dto.aadhaar = "12345678901".to_string();
        assert!(dto.validate().is_err());

        dto.aadhaar = "12345678901x".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn mismatched_passwords_are_rejected() {
        let mut dto = register_dto();
        dto.password_confirm = "different123".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn short_password_is_rejected() {
        let mut dto = register_dto();
        dto.password = "short".to_string();
        dto.password_confirm = "short".to_string();
        assert!(dto.validate().is_err());
    }
}
