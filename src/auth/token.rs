// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! JWT issuance and validation.
//!
//! Tokens are compact three-part JWTs (header.payload.signature) signed
//! with HS256 over a process-wide symmetric secret. The payload carries the
//! subject id (`sub`, stringified), a `username` claim, the issue time, and
//! an expiry fixed at one hour after issuance.
//!
//! Validation is a purely local cryptographic and time check: the signature
//! is verified against the same secret before any claim is trusted, then
//! expiry is checked. Failures classify as either expired (401) or invalid
//! (403); see [`AuthError`].

use std::collections::HashMap;

use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{AuthenticatedUser, AuthError};
use crate::config::ConfigError;

/// Token lifetime in seconds (1 hour).
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Claim names the issuer populates itself. Extra claims must not collide.
const RESERVED_CLAIMS: [&str; 4] = ["sub", "username", "iat", "exp"];

/// Wire-format token payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user id, stringified)
    pub sub: String,
    /// Username of the subject
    pub username: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiration (seconds since epoch)
    pub exp: i64,
    /// Open extension point for additional claims
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Issues and validates tokens with a shared symmetric secret.
///
/// Built once at startup from [`crate::config::JWT_KEY_ENV`] and shared
/// read-only across requests; issuance keeps no state, so there is nothing
/// to revoke server-side and an unexpired token stays valid until its
/// expiry passes.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Build the service from the plain-text signing secret.
    ///
    /// An absent or empty secret is a fatal configuration error; the
    /// process must not start without one.
    pub fn from_secret(secret: &str) -> Result<Self, ConfigError> {
        if secret.is_empty() {
            return Err(ConfigError::MissingJwtKey);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Issuer and validator share one clock, no skew to tolerate.
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// Issue a token for the given subject.
    pub fn issue(&self, user_id: i64, username: &str) -> Result<String, AuthError> {
        self.issue_with_claims(user_id, username, HashMap::new())
    }

    /// Issue a token with additional claims merged into the payload.
    ///
    /// `extra` must not use the reserved names `sub`, `username`, `iat`,
    /// or `exp`.
    pub fn issue_with_claims(
        &self,
        user_id: i64,
        username: &str,
        extra: HashMap<String, Value>,
    ) -> Result<String, AuthError> {
        self.issue_at(Utc::now().timestamp(), user_id, username, extra)
    }

    fn issue_at(
        &self,
        issued_at: i64,
        user_id: i64,
        username: &str,
        extra: HashMap<String, Value>,
    ) -> Result<String, AuthError> {
        if let Some(name) = RESERVED_CLAIMS.iter().find(|name| extra.contains_key(**name)) {
            return Err(AuthError::Internal(format!(
                "extra claim collides with reserved claim {name}"
            )));
        }

        let claims = TokenClaims {
            sub: user_id.to_string(),
            username: username.to_string(),
            iat: issued_at,
            exp: issued_at + TOKEN_TTL_SECS,
            extra,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    /// Validate a token and extract the authenticated identity.
    ///
    /// The signature is verified before any claim is trusted. A valid
    /// signature with a passed expiry classifies as [`AuthError::TokenExpired`];
    /// every other failure, including a non-numeric `sub`, classifies as
    /// [`AuthError::InvalidToken`].
    pub fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let token_data = decode::<TokenClaims>(token, &self.decoding, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })?;

        let claims = token_data.claims;
        let user_id = claims.sub.parse::<i64>().map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthenticatedUser {
            user_id,
            username: claims.username,
            expires_at: claims.exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::from_secret("unit-test-secret").unwrap()
    }

    #[test]
    fn empty_secret_is_a_config_error() {
        assert!(matches!(
            TokenService::from_secret(""),
            Err(ConfigError::MissingJwtKey)
        ));
    }

    #[test]
    fn issue_then_validate_round_trips() {
        let tokens = service();
        let token = tokens.issue(42, "alice123").unwrap();

        let user = tokens.validate(&token).unwrap();
        assert_eq!(user.user_id, 42);
        assert_eq!(user.username, "alice123");

        let now = Utc::now().timestamp();
        assert!(user.expires_at > now);
        assert!(user.expires_at <= now + TOKEN_TTL_SECS + 1);
    }

    #[test]
    fn expired_token_classifies_as_expired() {
        let tokens = service();
        let past = Utc::now().timestamp() - 2 * TOKEN_TTL_SECS;
        let token = tokens
            .issue_at(past, 42, "alice123", HashMap::new())
            .unwrap();

        assert_eq!(tokens.validate(&token), Err(AuthError::TokenExpired));
    }

    #[test]
    fn foreign_secret_classifies_as_invalid() {
        let tokens = service();
        let other = TokenService::from_secret("some-other-secret").unwrap();
        let token = other.issue(42, "alice123").unwrap();

        assert_eq!(tokens.validate(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn tampered_payload_classifies_as_invalid() {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

        let tokens = service();
        let token = tokens.issue(42, "alice123").unwrap();

        let mut parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);

        // Swap in a payload claiming a different subject.
        let forged = serde_json::json!({
            "sub": "1",
            "username": "alice123",
            "iat": Utc::now().timestamp(),
            "exp": Utc::now().timestamp() + TOKEN_TTL_SECS,
        });
        let forged_b64 = URL_SAFE_NO_PAD.encode(forged.to_string().as_bytes());
        parts[1] = &forged_b64;
        let tampered = parts.join(".");

        assert_eq!(tokens.validate(&tampered), Err(AuthError::InvalidToken));
    }

    #[test]
    fn malformed_token_classifies_as_invalid() {
        let tokens = service();
        assert_eq!(
            tokens.validate("not a token at all"),
            Err(AuthError::InvalidToken)
        );
        assert_eq!(tokens.validate(""), Err(AuthError::InvalidToken));
    }

    #[test]
    fn non_numeric_subject_classifies_as_invalid() {
        let tokens = service();
        let now = Utc::now().timestamp();
        let claims = serde_json::json!({
            "sub": "alice123",
            "username": "alice123",
            "iat": now,
            "exp": now + TOKEN_TTL_SECS,
        });
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"unit-test-secret"),
        )
        .unwrap();

        assert_eq!(tokens.validate(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn extra_claims_are_carried_in_the_payload() {
        let tokens = service();
        let mut extra = HashMap::new();
        extra.insert("org".to_string(), Value::String("acme".to_string()));
        let token = tokens.issue_with_claims(42, "alice123", extra).unwrap();

        // Identity extraction is unaffected by extra claims.
        let user = tokens.validate(&token).unwrap();
        assert_eq!(user.user_id, 42);

        let data = decode::<TokenClaims>(
            &token,
            &DecodingKey::from_secret(b"unit-test-secret"),
            &tokens.validation,
        )
        .unwrap();
        assert_eq!(data.claims.extra["org"], Value::String("acme".to_string()));
    }

    #[test]
    fn reserved_extra_claim_is_rejected() {
        let tokens = service();
        let mut extra = HashMap::new();
        extra.insert("sub".to_string(), Value::String("99".to_string()));

        let err = tokens.issue_with_claims(42, "alice123", extra).unwrap_err();
        assert!(matches!(err, AuthError::Internal(_)));
    }
}
