use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{ErrorMessage, HttpError};

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

pub fn create_token(
    user_id: &str,
    secret: &[u8],
    expires_in_minutes: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    if user_id.is_empty() {
        return Err(jsonwebtoken::errors::ErrorKind::InvalidSubject.into());
    }

    let now = Utc::now();
    let claims = TokenClaims {
        sub: user_id.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::minutes(expires_in_minutes)).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
}

pub fn decode_token<T: Into<String>>(token: T, secret: &[u8]) -> Result<String, HttpError> {
    let decoded = decode::<TokenClaims>(
        &token.into(),
        &DecodingKey::from_secret(secret),
        &Validation::new(Algorithm::HS256),
    );

    match decoded {
        Ok(token) => Ok(token.claims.sub),
        Err(_) => Err(HttpError::unauthorized(
            ErrorMessage::InvalidToken.to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_roundtrip_returns_subject() {
        let secret = b"secret-key";
        let id = uuid::Uuid::new_v4().to_string();

        let token = create_token(&id, secret, 60).unwrap();
        let sub = decode_token(token, secret).unwrap();

        assert_eq!(sub, id);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_token("some-user", b"secret-a", 60).unwrap();
        assert!(decode_token(token, b"secret-b").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let secret = b"secret-key";
        let token = create_token("some-user", secret, -60).unwrap();
        assert!(decode_token(token, secret).is_err());
    }

    #[test]
    fn empty_subject_is_rejected() {
        assert!(create_token("", b"secret-key", 60).is_err());
    }
}
