//! Auth Service
//!
//! Credential validation and JWT issuance/verification (HS256). The catalog
//! core has no awareness of identity; this service only gates the HTTP
//! surface in front of it.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::{AUTH_PASSWORD, AUTH_USERNAME, JWT_EXPIRY_HOURS};
use crate::error::{ApiError, Result};
use crate::models::{AuthenticatedUser, LoginRequest, LoginResponse};

// == JWT Claims ==
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued to
    pub sub: String,
    /// Issued-at (Unix seconds)
    pub iat: i64,
    /// Expiry (Unix seconds)
    pub exp: i64,
}

// == Auth Service ==
/// Issues and verifies short-lived bearer tokens.
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthService {
    // == Constructor ==
    /// Creates an AuthService signing with the given secret.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    // == Validate Credentials ==
    /// Checks the demo credential pair.
    pub fn validate_credentials(username: &str, password: &str) -> bool {
        username == AUTH_USERNAME && password == AUTH_PASSWORD
    }

    // == Generate Token ==
    /// Issues a token valid for `JWT_EXPIRY_HOURS` hours.
    pub fn generate_token(&self, username: &str) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(JWT_EXPIRY_HOURS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ApiError::Internal(format!("Failed to sign token: {e}")))
    }

    // == Verify Token ==
    /// Verifies signature and expiry, returning the embedded claims.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))
    }

    // == Login ==
    /// Validates credentials and issues a token for the caller.
    pub fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse> {
        if !Self::validate_credentials(&credentials.username, &credentials.password) {
            return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
        }

        let token = self.generate_token(&credentials.username)?;

        Ok(LoginResponse {
            token,
            user: AuthenticatedUser {
                username: credentials.username.clone(),
            },
        })
    }
}
