// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Registration and login endpoints.
//!
//! Both issue a fresh one-hour token on success. Neither is guarded; they
//! are how a client obtains a token in the first place.

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    auth::hashing,
    error::ApiError,
    models::{AuthResponse, LoginRequest, RegisterRequest},
    state::AppState,
};

/// Register a new user account.
#[utoipa::path(
    post,
    path = "/v1/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered, token issued", body = AuthResponse),
        (status = 409, description = "Username already exists"),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let digest = hashing::hash_password(&request.password);

    let mut store = state.store.write().await;
    let user = store.create_user(&request, digest)?;
    let token = state.tokens.issue(user.user_id, &user.username)?;

    tracing::info!(username = %user.username, user_id = user.user_id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            username: user.username,
            user_id: user.user_id,
            token,
        }),
    ))
}

/// Log in with username and password.
///
/// An unknown username and a wrong password are reported differently
/// (404 vs 401), matching the stored-credential lookup order.
#[utoipa::path(
    post,
    path = "/v1/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials correct, token issued", body = AuthResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 404, description = "User not found"),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let store = state.store.read().await;
    let Some(user) = store.user_by_username(&request.username) else {
        return Err(ApiError::not_found("User not found"));
    };

    if !hashing::verify_password(&request.password, &user.password_digest) {
        tracing::warn!(username = %request.username, "failed login attempt");
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = state.tokens.issue(user.user_id, &user.username)?;

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        username: user.username.clone(),
        user_id: user.user_id,
        token,
    }))
}
