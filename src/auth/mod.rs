pub mod current_user;
pub mod password;
pub mod permissions;

pub use current_user::CurrentUser;
pub use password::{hash_password, verify_password};
pub use permissions::{Nivel, Permissions};

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

/// Token lifetime when the caller does not ask for one
const DEFAULT_EXPIRY_MINUTES: i64 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// Response body of a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub username: String,
}

impl Token {
    pub fn bearer(access_token: String, username: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            username,
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid JWT secret")]
    InvalidSecret,

    #[error("Unsupported JWT algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Invalid JWT token: {0}")]
    InvalidToken(String),
}

/// Signing material and lifetimes for bearer tokens
#[derive(Clone)]
pub struct TokenSettings {
    secret: String,
    algorithm: Algorithm,
    expire_minutes: i64,
}

impl TokenSettings {
    pub fn new(secret: impl Into<String>, algorithm: &str, expire_minutes: i64) -> Result<Self, AuthError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(AuthError::InvalidSecret);
        }
        let algorithm = match algorithm.to_uppercase().as_str() {
            "HS256" => Algorithm::HS256,
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            other => return Err(AuthError::UnsupportedAlgorithm(other.to_string())),
        };
        Ok(Self {
            secret,
            algorithm,
            expire_minutes,
        })
    }

    pub fn from_config() -> Result<Self, AuthError> {
        let security = &config::config().security;
        Self::new(
            security.secret_key.clone(),
            &security.algorithm,
            security.access_token_expire_minutes,
        )
    }

    /// Lifetime of tokens issued at login
    pub fn login_expiry(&self) -> Duration {
        Duration::minutes(self.expire_minutes)
    }

    pub fn create_access_token(&self, sub: &str, expires_delta: Option<Duration>) -> Result<String, AuthError> {
        let now = Utc::now();
        let expire = now + expires_delta.unwrap_or_else(|| Duration::minutes(DEFAULT_EXPIRY_MINUTES));
        let claims = Claims {
            sub: sub.to_string(),
            exp: expire.timestamp(),
            iat: now.timestamp(),
        };
        encode(
            &Header::new(self.algorithm),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))
    }

    pub fn decode_token(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        let token_data = decode::<Claims>(token, &DecodingKey::from_secret(self.secret.as_bytes()), &validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        if token_data.claims.sub.trim().is_empty() {
            return Err(AuthError::InvalidToken("missing subject".to_string()));
        }
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> TokenSettings {
        TokenSettings::new("a-test-secret", "HS256", 30).unwrap()
    }

    #[test]
    fn token_round_trip_keeps_subject() {
        let settings = settings();
        let token = settings.create_access_token("juez@pjecz.gob.mx", None).unwrap();
        let claims = settings.decode_token(&token).unwrap();
        assert_eq!(claims.sub, "juez@pjecz.gob.mx");
        assert_eq!(claims.exp - claims.iat, DEFAULT_EXPIRY_MINUTES * 60);
    }

    #[test]
    fn login_tokens_use_configured_lifetime() {
        let settings = settings();
        let token = settings
            .create_access_token("juez@pjecz.gob.mx", Some(settings.login_expiry()))
            .unwrap();
        let claims = settings.decode_token(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn expired_token_is_rejected() {
        let settings = settings();
        let token = settings
            .create_access_token("juez@pjecz.gob.mx", Some(Duration::minutes(-5)))
            .unwrap();
        assert!(matches!(settings.decode_token(&token), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn foreign_signature_is_rejected() {
        let other = TokenSettings::new("another-secret", "HS256", 30).unwrap();
        let token = other.create_access_token("juez@pjecz.gob.mx", None).unwrap();
        assert!(settings().decode_token(&token).is_err());
        assert!(settings().decode_token("not.a.token").is_err());
    }

    #[test]
    fn empty_subject_is_rejected() {
        let settings = settings();
        let token = settings.create_access_token("", None).unwrap();
        assert!(settings.decode_token(&token).is_err());
    }

    #[test]
    fn rejects_bad_settings() {
        assert!(matches!(TokenSettings::new("", "HS256", 30), Err(AuthError::InvalidSecret)));
        assert!(matches!(
            TokenSettings::new("s", "RS256", 30),
            Err(AuthError::UnsupportedAlgorithm(_))
        ));
    }
}
