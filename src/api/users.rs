// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User profile endpoints.
//!
//! The read takes its token from the Authorization header; the update
//! carries it in the body. Both bind the subject id from the token, so a
//! user can only ever read or write their own row.

use axum::{extract::State, Json};

use crate::{
    auth::{authorize_body_token, Auth},
    error::ApiError,
    models::{UpdateProfileRequest, UserProfile},
    state::AppState,
};

/// Get the authenticated user's profile.
#[utoipa::path(
    get,
    path = "/v1/users/me",
    tag = "Users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Profile of the authenticated user", body = UserProfile),
        (status = 400, description = "Missing token"),
        (status = 401, description = "Token expired"),
        (status = 403, description = "Invalid token"),
        (status = 404, description = "User not found"),
    )
)]
pub async fn get_current_user(
    Auth(user): Auth,
    State(state): State<AppState>,
) -> Result<Json<UserProfile>, ApiError> {
    let store = state.store.read().await;
    let profile = store
        .user(user.user_id)
        .map(UserProfile::from)
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    tracing::info!(user_id = user.user_id, "fetched user info");
    Ok(Json(profile))
}

/// Update the authenticated user's profile.
///
/// Absent fields are left unchanged; at least one must be present.
#[utoipa::path(
    put,
    path = "/v1/users/me",
    tag = "Users",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = UserProfile),
        (status = 400, description = "Missing token or no fields to update"),
        (status = 401, description = "Token expired"),
        (status = 403, description = "Invalid token"),
        (status = 404, description = "User not found"),
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    let identity = authorize_body_token(&state.tokens, request.token.as_deref())?;

    let mut store = state.store.write().await;
    let user = store.update_profile(identity.user_id, &request)?;

    tracing::info!(user_id = identity.user_id, "updated user info");
    Ok(Json(UserProfile::from(&user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::auth::register;
    use crate::auth::TokenService;
    use crate::models::RegisterRequest;
    use crate::store::InMemoryStore;
    use axum::http::StatusCode;

    fn test_state() -> AppState {
        AppState::new(
            InMemoryStore::new(),
            TokenService::from_secret("api-test-secret").unwrap(),
        )
    }

    async fn register_alice(state: &AppState) -> String {
        let (_, Json(response)) = register(
            State(state.clone()),
            Json(RegisterRequest {
                first_name: "Alice".into(),
                last_name: "Smith".into(),
                username: "alice123".into(),
                password: "password123".into(),
                industry: "Security".into(),
                user_role: "Analyst".into(),
                bio: None,
            }),
        )
        .await
        .unwrap();
        response.token
    }

    #[tokio::test]
    async fn registered_token_reads_back_the_profile() {
        let state = test_state();
        let token = register_alice(&state).await;

        let user = state.tokens.validate(&token).unwrap();
        let Json(profile) = get_current_user(Auth(user), State(state.clone()))
            .await
            .expect("profile read succeeds");

        assert_eq!(profile.username, "alice123");
        assert_eq!(profile.first_name, "Alice");
    }

    #[tokio::test]
    async fn update_applies_fields_for_the_token_subject() {
        let state = test_state();
        let token = register_alice(&state).await;

        let Json(profile) = update_profile(
            State(state.clone()),
            Json(UpdateProfileRequest {
                token: Some(token),
                first_name: None,
                last_name: None,
                industry: Some("Healthcare".into()),
                user_role: None,
                bio: Some("moved fields".into()),
            }),
        )
        .await
        .expect("profile update succeeds");

        assert_eq!(profile.industry, "Healthcare");
        assert_eq!(profile.bio.as_deref(), Some("moved fields"));
        assert_eq!(profile.username, "alice123");
    }

    #[tokio::test]
    async fn update_without_token_is_400() {
        let state = test_state();
        register_alice(&state).await;

        let err = update_profile(
            State(state),
            Json(UpdateProfileRequest {
                token: None,
                first_name: Some("Mallory".into()),
                last_name: None,
                industry: None,
                user_role: None,
                bio: None,
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Missing JWT token");
    }

    #[tokio::test]
    async fn update_with_no_fields_is_400() {
        let state = test_state();
        let token = register_alice(&state).await;

        let err = update_profile(
            State(state),
            Json(UpdateProfileRequest {
                token: Some(token),
                first_name: None,
                last_name: None,
                industry: None,
                user_role: None,
                bio: None,
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "No fields provided to update");
    }
}
