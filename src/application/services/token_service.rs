//! JWT issuing and verification service.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

pub const TOKEN_TYPE_ACCESS: &str = "access";
pub const TOKEN_TYPE_REFRESH: &str = "refresh";

/// Claims carried by both access and refresh tokens.
///
/// The two kinds share a shape and differ only in `token_type` and lifetime.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Id of the account the token was issued to.
    pub sub: i64,
    pub iat: i64,
    pub exp: i64,
    /// Unique token id, available for audit trails.
    pub jti: String,
    pub token_type: String,
}

/// Service for signing and verifying JWTs.
///
/// Tokens are signed with HMAC-SHA256. Verification enforces expiry and the
/// token type, so a refresh token can never pass where an access token is
/// required and vice versa.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_minutes: i64,
    refresh_token_days: i64,
}

impl TokenService {
    /// Creates a new token service.
    ///
    /// # Arguments
    ///
    /// - `secret` - HMAC signing key; must stay stable across restarts or
    ///   every outstanding token is invalidated
    /// - `access_token_minutes` - access token lifetime
    /// - `refresh_token_days` - refresh token lifetime
    pub fn new(secret: &str, access_token_minutes: i64, refresh_token_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_minutes,
            refresh_token_days,
        }
    }

    /// Issues a short-lived access token for an account.
    pub fn generate_access_token(&self, user_id: i64) -> Result<String, AppError> {
        self.generate(
            user_id,
            TOKEN_TYPE_ACCESS,
            Duration::minutes(self.access_token_minutes),
        )
    }

    /// Issues a long-lived refresh token for an account.
    pub fn generate_refresh_token(&self, user_id: i64) -> Result<String, AppError> {
        self.generate(
            user_id,
            TOKEN_TYPE_REFRESH,
            Duration::days(self.refresh_token_days),
        )
    }

    /// Verifies an access token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with:
    /// - `"Token has expired"` for an expired signature
    /// - `"Only access tokens are allowed"` for a refresh token
    /// - `"Invalid token"` for anything else that fails to verify
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, AppError> {
        self.verify(token, TOKEN_TYPE_ACCESS, "Only access tokens are allowed")
    }

    /// Verifies a refresh token and returns its claims.
    ///
    /// # Errors
    ///
    /// Same as [`Self::verify_access_token`], except an access token is
    /// rejected with `"Only refresh tokens are allowed"`.
    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims, AppError> {
        self.verify(token, TOKEN_TYPE_REFRESH, "Only refresh tokens are allowed")
    }

    /// Verifies signature and expiry without regard to token type.
    ///
    /// Backs the token introspection endpoint, which accepts both kinds.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AppError> {
        self.decode_claims(token)
    }

    fn generate(&self, user_id: i64, token_type: &str, ttl: Duration) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
            token_type: token_type.to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign token: {e}")))
    }

    fn verify(
        &self,
        token: &str,
        expected_type: &str,
        wrong_type_message: &str,
    ) -> Result<Claims, AppError> {
        let claims = self.decode_claims(token)?;

        if claims.token_type != expected_type {
            return Err(AppError::unauthorized(wrong_type_message));
        }

        Ok(claims)
    }

    fn decode_claims(&self, token: &str) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::unauthorized("Token has expired")
                }
                _ => AppError::unauthorized("Invalid token"),
            })?;

        Ok(token_data.claims)
    }
}
