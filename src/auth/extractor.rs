// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! The authorization guard applied by every protected operation.
//!
//! Each operation's contract fixes where the bearer token travels: either
//! the `Authorization` header or a `token` field in the JSON body, never
//! both. Both locations run through the same pipeline: locate the token,
//! fail fast with a 400 when it is absent, otherwise delegate to
//! [`TokenService::validate`] and bind the extracted identity for the rest
//! of the request. The guard completes before any store access.
//!
//! Header-carried tokens use the `Auth` extractor:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(user): Auth) -> impl IntoResponse {
//!     // user is AuthenticatedUser
//! }
//! ```
//!
//! Body-carried tokens use [`authorize_body_token`] as the first statement
//! of the handler.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use super::{AuthError, AuthenticatedUser, TokenService};
use crate::state::AppState;

/// Extractor for operations that carry the token in the Authorization
/// header.
///
/// Accepts both a bare token and the `Bearer <token>` form; the header
/// name match is case-insensitive per HTTP semantics.
pub struct Auth(pub AuthenticatedUser);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // An identity placed in extensions upstream wins.
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>().cloned() {
            return Ok(Auth(user));
        }

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|_| AuthError::InvalidToken)?;

        let token = bearer_token(header);
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        let user = state.tokens.validate(token)?;
        Ok(Auth(user))
    }
}

/// Guard for operations whose contract carries the token in the request
/// body.
///
/// A missing or empty token fails fast with [`AuthError::MissingToken`]
/// without invoking the validator.
pub fn authorize_body_token(
    tokens: &TokenService,
    token: Option<&str>,
) -> Result<AuthenticatedUser, AuthError> {
    let token = token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingToken)?;
    tokens.validate(token)
}

fn bearer_token(header: &str) -> &str {
    header.strip_prefix("Bearer ").unwrap_or(header).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use crate::store::InMemoryStore;
    use axum::http::Request;

    fn test_state() -> AppState {
        AppState::new(
            InMemoryStore::new(),
            TokenService::from_secret("extractor-test-secret").unwrap(),
        )
    }

    fn parts_with_header(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/test");
        if let Some(value) = value {
            builder = builder.header("Authorization", value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn missing_header_fails_with_missing_token() {
        let state = test_state();
        let mut parts = parts_with_header(None);

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MissingToken)));
    }

    #[tokio::test]
    async fn bare_token_is_accepted() {
        let state = test_state();
        let token = state.tokens.issue(7, "alice123").unwrap();
        let mut parts = parts_with_header(Some(&token));

        let Auth(user) = Auth::from_request_parts(&mut parts, &state).await.unwrap();
        assert_eq!(user.user_id, 7);
        assert_eq!(user.username, "alice123");
    }

    #[tokio::test]
    async fn bearer_prefixed_token_is_accepted() {
        let state = test_state();
        let token = state.tokens.issue(7, "alice123").unwrap();
        let mut parts = parts_with_header(Some(&format!("Bearer {token}")));

        let Auth(user) = Auth::from_request_parts(&mut parts, &state).await.unwrap();
        assert_eq!(user.user_id, 7);
    }

    #[tokio::test]
    async fn garbage_token_fails_with_invalid_token() {
        let state = test_state();
        let mut parts = parts_with_header(Some("Bearer complete-nonsense"));

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn extractor_prefers_extensions() {
        let state = test_state();
        let mut parts = parts_with_header(None);

        let user = AuthenticatedUser {
            user_id: 99,
            username: "from_middleware".to_string(),
            expires_at: 0,
        };
        parts.extensions.insert(user);

        let Auth(user) = Auth::from_request_parts(&mut parts, &state).await.unwrap();
        assert_eq!(user.user_id, 99);
    }

    #[test]
    fn body_token_guard_fails_fast_when_absent() {
        let tokens = TokenService::from_secret("extractor-test-secret").unwrap();

        assert!(matches!(
            authorize_body_token(&tokens, None),
            Err(AuthError::MissingToken)
        ));
        assert!(matches!(
            authorize_body_token(&tokens, Some("")),
            Err(AuthError::MissingToken)
        ));
        assert!(matches!(
            authorize_body_token(&tokens, Some("   ")),
            Err(AuthError::MissingToken)
        ));
    }

    #[test]
    fn body_token_guard_validates_present_tokens() {
        let tokens = TokenService::from_secret("extractor-test-secret").unwrap();
        let token = tokens.issue(3, "bob").unwrap();

        let user = authorize_body_token(&tokens, Some(&token)).unwrap();
        assert_eq!(user.user_id, 3);

        assert!(matches!(
            authorize_body_token(&tokens, Some("garbage")),
            Err(AuthError::InvalidToken)
        ));
    }
}
