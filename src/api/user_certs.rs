// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User certification endpoints.
//!
//! Every operation here touches owner-scoped rows, so every one runs the
//! authorization guard to completion before the store is touched. Reads
//! take the token from the Authorization header; mutations carry it in a
//! `token` body field. A row owned by someone else renders as 404, the
//! same as a missing row.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    auth::{authorize_body_token, Auth},
    error::ApiError,
    models::{
        CreateUserCertRequest, DeleteResponse, DeleteUserCertsRequest, UpdateUserCertRequest,
        UserCertListResponse, UserCertMutationResponse, UserCertQuery,
    },
    state::AppState,
};

/// List the authenticated user's certifications, joined with their
/// catalog entries.
#[utoipa::path(
    get,
    path = "/v1/user-certs",
    tag = "UserCerts",
    security(("bearer" = [])),
    params(UserCertQuery),
    responses(
        (status = 200, body = UserCertListResponse),
        (status = 400, description = "Missing token"),
        (status = 401, description = "Token expired"),
        (status = 403, description = "Invalid token"),
        (status = 404, description = "Requested row not found or not owned"),
    )
)]
pub async fn list_user_certs(
    Auth(user): Auth,
    State(state): State<AppState>,
    Query(params): Query<UserCertQuery>,
) -> Result<Json<UserCertListResponse>, ApiError> {
    let store = state.store.read().await;
    let user_certifications = store.list_user_certs(&user, params.user_cert_id);

    // A single-row read that matches nothing is indistinguishable from a
    // read of someone else's row.
    if params.user_cert_id.is_some() && user_certifications.is_empty() {
        return Err(ApiError::not_found("User_cert not found or not owned"));
    }

    tracing::info!(
        user_id = user.user_id,
        count = user_certifications.len(),
        "retrieved user certifications"
    );
    Ok(Json(UserCertListResponse { user_certifications }))
}

/// Record a certification for the authenticated user.
#[utoipa::path(
    post,
    path = "/v1/user-certs",
    tag = "UserCerts",
    request_body = CreateUserCertRequest,
    responses(
        (status = 201, body = UserCertMutationResponse),
        (status = 400, description = "Missing token"),
        (status = 401, description = "Token expired"),
        (status = 403, description = "Invalid token"),
        (status = 404, description = "Certification not found"),
    )
)]
pub async fn create_user_cert(
    State(state): State<AppState>,
    Json(request): Json<CreateUserCertRequest>,
) -> Result<(StatusCode, Json<UserCertMutationResponse>), ApiError> {
    let identity = authorize_body_token(&state.tokens, request.token.as_deref())?;

    let mut store = state.store.write().await;
    let row = store.create_user_cert(&identity, &request)?;

    tracing::info!(
        user_cert_id = row.user_cert_id,
        user_id = identity.user_id,
        "created user_cert"
    );

    Ok((
        StatusCode::CREATED,
        Json(UserCertMutationResponse {
            message: "User_cert created successfully".to_string(),
            user_cert_id: row.user_cert_id,
        }),
    ))
}

/// Replace an owned row's fields.
#[utoipa::path(
    put,
    path = "/v1/user-certs/{user_cert_id}",
    tag = "UserCerts",
    params(("user_cert_id" = i64, Path, description = "Row to update")),
    request_body = UpdateUserCertRequest,
    responses(
        (status = 200, body = UserCertMutationResponse),
        (status = 400, description = "Missing token"),
        (status = 401, description = "Token expired"),
        (status = 403, description = "Invalid token"),
        (status = 404, description = "Row not found or not owned"),
    )
)]
pub async fn update_user_cert(
    Path(user_cert_id): Path<i64>,
    State(state): State<AppState>,
    Json(request): Json<UpdateUserCertRequest>,
) -> Result<Json<UserCertMutationResponse>, ApiError> {
    let identity = authorize_body_token(&state.tokens, request.token.as_deref())?;

    let mut store = state.store.write().await;
    let row = store.update_user_cert(&identity, user_cert_id, &request)?;

    tracing::info!(
        user_cert_id = row.user_cert_id,
        user_id = identity.user_id,
        "updated user_cert"
    );

    Ok(Json(UserCertMutationResponse {
        message: "User_cert updated successfully".to_string(),
        user_cert_id: row.user_cert_id,
    }))
}

/// Delete one owned row, or all of the authenticated user's rows when no
/// id is given.
#[utoipa::path(
    delete,
    path = "/v1/user-certs",
    tag = "UserCerts",
    request_body = DeleteUserCertsRequest,
    responses(
        (status = 200, body = DeleteResponse),
        (status = 400, description = "Missing token"),
        (status = 401, description = "Token expired"),
        (status = 403, description = "Invalid token"),
        (status = 404, description = "No records found to delete"),
    )
)]
pub async fn delete_user_certs(
    State(state): State<AppState>,
    Json(request): Json<DeleteUserCertsRequest>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let identity = authorize_body_token(&state.tokens, request.token.as_deref())?;

    let mut store = state.store.write().await;
    let rows_deleted = store.delete_user_certs(&identity, request.user_cert_id)?;

    tracing::info!(
        user_id = identity.user_id,
        rows_deleted,
        "deleted user_certs"
    );

    Ok(Json(DeleteResponse {
        message: "Delete successful".to_string(),
        rows_deleted,
    }))
}
