//! Session tokens
//!
//! HS256 access and refresh tokens whose subject is the member's profile id.
//! The `use` claim keeps a refresh token from being accepted as a session.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// `iss` of every token this service signs
pub const TOKEN_ISSUER: &str = "wiruda";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum TokenUse {
    Access,
    Refresh,
}

/// Verified token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Profile id
    pub sub: Uuid,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(rename = "use")]
    token_use: TokenUse,
}

impl Claims {
    /// Profile id the token was issued for
    #[must_use]
    pub fn user_id(&self) -> Uuid {
        self.sub
    }
}

/// Access and refresh token handed out at login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

/// Signs and verifies session tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl: i64,
    refresh_ttl: i64,
}

impl JwtService {
    /// Lifetimes are in seconds
    #[must_use]
    pub fn new(secret: &str, access_ttl: i64, refresh_ttl: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[TOKEN_ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            access_ttl,
            refresh_ttl,
        }
    }

    /// Issue a fresh access/refresh pair for a profile
    ///
    /// # Errors
    /// Returns an internal error if signing fails
    pub fn issue_pair(&self, user_id: Uuid) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access_token: self.sign(user_id, TokenUse::Access)?,
            refresh_token: self.sign(user_id, TokenUse::Refresh)?,
            token_type: "Bearer".to_string(),
            expires_in: self.access_ttl,
        })
    }

    /// Verify a session (access) token
    ///
    /// # Errors
    /// `TokenExpired` past `exp`, `InvalidToken` for anything else that fails
    pub fn verify_access(&self, token: &str) -> Result<Claims, AppError> {
        self.verify(token, TokenUse::Access)
    }

    /// Trade a refresh token for a new pair
    ///
    /// # Errors
    /// Same as [`Self::verify_access`], for the refresh token
    pub fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let claims = self.verify(refresh_token, TokenUse::Refresh)?;
        self.issue_pair(claims.sub)
    }

    fn sign(&self, user_id: Uuid, token_use: TokenUse) -> Result<String, AppError> {
        let ttl = match token_use {
            TokenUse::Access => self.access_ttl,
            TokenUse::Refresh => self.refresh_ttl,
        };
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            iss: TOKEN_ISSUER.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl)).timestamp(),
            token_use,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to sign token: {e}")))
    }

    fn verify(&self, token: &str, expected: TokenUse) -> Result<Claims, AppError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })?
            .claims;

        if claims.token_use == expected {
            Ok(claims)
        } else {
            Err(AppError::InvalidToken)
        }
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish_non_exhaustive()
    }
}
