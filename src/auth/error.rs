// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::ApiError;

/// Classified authentication error.
///
/// Every failure of the authorization guard maps to exactly one of these
/// variants before any HTTP status is chosen, so an ownership or token
/// problem can never surface as a generic internal error.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    /// No token present where the operation's contract requires one
    MissingToken,
    /// Signature verification failed, the token is malformed, or the
    /// subject claim is not a numeric id
    InvalidToken,
    /// Signature is valid but the expiry has passed
    TokenExpired,
    /// Issuer-side failure (key or claim construction)
    Internal(String),
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: String,
    error_code: String,
}

impl AuthError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "missing_token",
            AuthError::InvalidToken => "invalid_token",
            AuthError::TokenExpired => "token_expired",
            AuthError::Internal(_) => "internal_error",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken => StatusCode::BAD_REQUEST,
            AuthError::InvalidToken => StatusCode::FORBIDDEN,
            AuthError::TokenExpired => StatusCode::UNAUTHORIZED,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::MissingToken => write!(f, "Missing JWT token"),
            AuthError::InvalidToken => write!(f, "Invalid token"),
            AuthError::TokenExpired => write!(f, "Token expired"),
            AuthError::Internal(msg) => write!(f, "Internal authentication error: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(AuthErrorBody {
            error: self.to_string(),
            error_code: self.error_code().to_string(),
        });
        (status, body).into_response()
    }
}

/// Handlers that guard a body-carried token return `ApiError`; the
/// classified status and message carry over unchanged.
impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        ApiError::new(e.status_code(), e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn missing_token_returns_400() {
        let response = AuthError::MissingToken.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["error"], "Missing JWT token");
        assert_eq!(body["error_code"], "missing_token");
    }

    #[test]
    fn expired_returns_401_and_invalid_returns_403() {
        assert_eq!(AuthError::TokenExpired.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::InvalidToken.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn converts_to_api_error_with_same_status() {
        let api: ApiError = AuthError::TokenExpired.into();
        assert_eq!(api.status, StatusCode::UNAUTHORIZED);
        assert_eq!(api.message, "Token expired");
    }
}
