use std::fmt;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ErrorMessage {
    #[error("Server Error. Please try again later")]
    ServerError,
    #[error("Invalid email or password")]
    WrongCredentials,
    #[error("An account with this email already exists")]
    EmailExist,
    #[error("An account with this Aadhaar number already exists")]
    AadhaarExist,
    #[error("User belonging to this token no longer exists")]
    UserNoLongerExist,
    #[error("Password cannot be empty")]
    EmptyPassword,
    #[error("Password must not be more than {0} characters")]
    ExceededMaxPasswordLength(usize),
    #[error("Error while hashing password")]
    HashingError,
    #[error("Invalid password hash format")]
    InvalidHashFormat,
    #[error("Authentication token is invalid or expired")]
    InvalidToken,
    #[error("You are not logged in, please provide a token")]
    TokenNotProvided,
    #[error("You are not allowed to perform this action")]
    PermissionDenied,
    #[error("User is not authenticated")]
    UserNotAuthenticated,
}

#[derive(Debug, Clone)]
pub struct HttpError {
    pub message: String,
    pub status: StatusCode,
}

impl HttpError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        HttpError {
            message: message.into(),
            status,
        }
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::BAD_REQUEST)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::UNAUTHORIZED)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::NOT_FOUND)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::CONFLICT)
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HttpError: message: {}, status: {}",
            self.message, self.status
        )
    }
}

impl std::error::Error for HttpError {}

impl IntoResponse for HttpError {
    fn into_response(self) -> axum::response::Response {
        let status = if self.status.is_server_error() {
            "error"
        } else {
            "fail"
        };

        let body = Json(ErrorResponse {
            status: status.to_string(),
            message: self.message,
        });

        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_map_to_expected_status_codes() {
        assert_eq!(
            HttpError::bad_request("bad").status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            HttpError::unauthorized("no token").status,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            HttpError::not_found("missing").status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(HttpError::conflict("dup").status, StatusCode::CONFLICT);
        assert_eq!(
            HttpError::server_error("boom").status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_messages_render_human_text() {
        assert_eq!(
            ErrorMessage::WrongCredentials.to_string(),
            "Invalid email or password"
        );
        assert_eq!(
            ErrorMessage::ExceededMaxPasswordLength(64).to_string(),
            "Password must not be more than 64 characters"
        );
    }
}
