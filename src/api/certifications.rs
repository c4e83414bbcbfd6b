// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Certification catalog endpoints.
//!
//! Catalog rows are shared reference data with no owner: reads are open to
//! anyone and mutations carry no privilege check. Restricting mutations to
//! administrators would need a role field the user model does not have.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::ApiError,
    models::{
        CertificationListResponse, CertificationMutationResponse, CreateCertificationRequest,
        DeleteResponse, UpdateCertificationRequest,
    },
    state::AppState,
};

/// List every certification in the catalog.
#[utoipa::path(
    get,
    path = "/v1/certifications",
    tag = "Certifications",
    responses((status = 200, body = CertificationListResponse))
)]
pub async fn list_certifications(
    State(state): State<AppState>,
) -> Result<Json<CertificationListResponse>, ApiError> {
    let store = state.store.read().await;
    let certifications = store.list_certifications();

    tracing::info!(count = certifications.len(), "retrieved certifications");
    Ok(Json(CertificationListResponse { certifications }))
}

/// Add a certification definition to the catalog.
#[utoipa::path(
    post,
    path = "/v1/certifications",
    tag = "Certifications",
    request_body = CreateCertificationRequest,
    responses((status = 201, body = CertificationMutationResponse))
)]
pub async fn create_certification(
    State(state): State<AppState>,
    Json(request): Json<CreateCertificationRequest>,
) -> Result<(StatusCode, Json<CertificationMutationResponse>), ApiError> {
    let mut store = state.store.write().await;
    let certification = store.create_certification(request);

    tracing::info!(
        certification_id = certification.certification_id,
        "created certification"
    );

    Ok((
        StatusCode::CREATED,
        Json(CertificationMutationResponse {
            message: "Certification created successfully".to_string(),
            certification_id: certification.certification_id,
        }),
    ))
}

/// Replace a catalog entry's fields.
#[utoipa::path(
    put,
    path = "/v1/certifications/{certification_id}",
    tag = "Certifications",
    params(("certification_id" = i64, Path, description = "Catalog entry to update")),
    request_body = UpdateCertificationRequest,
    responses(
        (status = 200, body = CertificationMutationResponse),
        (status = 404, description = "Certification not found"),
    )
)]
pub async fn update_certification(
    Path(certification_id): Path<i64>,
    State(state): State<AppState>,
    Json(request): Json<UpdateCertificationRequest>,
) -> Result<Json<CertificationMutationResponse>, ApiError> {
    let mut store = state.store.write().await;
    let certification = store.update_certification(certification_id, request)?;

    tracing::info!(
        certification_id = certification.certification_id,
        "updated certification"
    );

    Ok(Json(CertificationMutationResponse {
        message: "Certification updated successfully".to_string(),
        certification_id: certification.certification_id,
    }))
}

/// Remove a catalog entry.
#[utoipa::path(
    delete,
    path = "/v1/certifications/{certification_id}",
    tag = "Certifications",
    params(("certification_id" = i64, Path, description = "Catalog entry to delete")),
    responses(
        (status = 200, body = DeleteResponse),
        (status = 404, description = "Certification not found"),
    )
)]
pub async fn delete_certification(
    Path(certification_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let mut store = state.store.write().await;
    store.delete_certification(certification_id)?;

    tracing::info!(certification_id, "deleted certification");

    Ok(Json(DeleteResponse {
        message: "Delete successful".to_string(),
        rows_deleted: 1,
    }))
}
