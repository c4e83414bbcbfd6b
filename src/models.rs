// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! This module defines the request and response data structures used by
//! the REST API. All wire types derive `Serialize`/`Deserialize` and
//! `ToSchema` for automatic JSON handling and OpenAPI documentation.
//!
//! ## Model Categories
//!
//! - **Users**: account records, registration/login, profile
//! - **Certifications**: the shared catalog of certification definitions
//! - **User certifications**: per-user instances referencing the catalog
//!
//! The catalog/instance split matters for authorization: `Certification`
//! rows have no owner, while every `UserCert` row belongs to exactly one
//! user and is only reachable by its owner.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::ownership::OwnedResource;

// =============================================================================
// User Models
// =============================================================================

/// A registered user account as held by the store.
///
/// Carries the password digest, so it is never serialized to the wire;
/// responses use [`UserProfile`].
#[derive(Debug, Clone)]
pub struct User {
    /// Unique identifier, allocated by the store.
    pub user_id: i64,
    /// Unique login name.
    pub username: String,
    /// Base64-encoded SHA-256 digest of the password. Never the plaintext.
    pub password_digest: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Industry the user works in.
    pub industry: String,
    /// Free-form role title (not an authorization role).
    pub user_role: String,
    /// Optional short biography.
    pub bio: Option<String>,
}

/// A user's public profile, as returned by the user-info endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserProfile {
    /// Unique identifier.
    pub user_id: i64,
    /// Unique login name.
    pub username: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Industry the user works in.
    pub industry: String,
    /// Free-form role title.
    pub user_role: String,
    /// Optional short biography.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            industry: user.industry.clone(),
            user_role: user.user_role.clone(),
            bio: user.bio.clone(),
        }
    }
}

/// Request to register a new user account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Desired login name (must be unique).
    pub username: String,
    /// Plaintext password; hashed before it reaches the store.
    pub password: String,
    /// Industry the user works in.
    pub industry: String,
    /// Free-form role title.
    pub user_role: String,
    /// Optional short biography.
    #[serde(default)]
    pub bio: Option<String>,
}

/// Request to log in with username and password.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Login name.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// Response for successful registration or login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    /// Human-readable outcome message.
    pub message: String,
    /// Login name of the authenticated user.
    pub username: String,
    /// Unique identifier of the authenticated user.
    pub user_id: i64,
    /// Signed bearer token, valid for one hour.
    pub token: String,
}

/// Request to update the authenticated user's profile.
///
/// This operation carries its token in the body. Absent fields are left
/// unchanged; at least one field must be present.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    /// Bearer token of the acting user.
    #[serde(default)]
    pub token: Option<String>,
    /// New given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// New family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// New industry.
    #[serde(default)]
    pub industry: Option<String>,
    /// New role title.
    #[serde(default)]
    pub user_role: Option<String>,
    /// New biography.
    #[serde(default)]
    pub bio: Option<String>,
}

impl UpdateProfileRequest {
    /// True when no profile field is present to apply.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.industry.is_none()
            && self.user_role.is_none()
            && self.bio.is_none()
    }
}

// =============================================================================
// Certification Models (catalog)
// =============================================================================

/// A certification definition from the shared catalog.
///
/// Catalog rows have no owner: reads are unrestricted and mutations carry
/// no ownership check.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Certification {
    /// Unique identifier, allocated by the store.
    pub certification_id: i64,
    /// Knowledge domain this certification belongs to.
    pub domain_id: i32,
    /// Display name of the certification.
    pub cert_name: String,
    /// Issuing organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_description: Option<String>,
    /// Renewal period in months; 0 when the certification never expires.
    pub renewal_period_months: i32,
}

/// Request to create a catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCertificationRequest {
    /// Knowledge domain this certification belongs to.
    pub domain_id: i32,
    /// Display name of the certification.
    pub cert_name: String,
    /// Issuing organization.
    #[serde(default)]
    pub provider: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub cert_description: Option<String>,
    /// Renewal period in months; defaults to 0.
    #[serde(default)]
    pub renewal_period_months: i32,
}

/// Request to replace a catalog entry's fields.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateCertificationRequest {
    /// Knowledge domain this certification belongs to.
    pub domain_id: i32,
    /// Display name of the certification.
    pub cert_name: String,
    /// Issuing organization.
    #[serde(default)]
    pub provider: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub cert_description: Option<String>,
    /// Renewal period in months; defaults to 0.
    #[serde(default)]
    pub renewal_period_months: i32,
}

/// Response listing catalog entries.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CertificationListResponse {
    /// All catalog entries.
    pub certifications: Vec<Certification>,
}

/// Response after a catalog mutation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CertificationMutationResponse {
    /// Human-readable outcome message.
    pub message: String,
    /// Identifier of the affected catalog entry.
    pub certification_id: i64,
}

// =============================================================================
// User Certification Models (instance)
// =============================================================================

/// A user's earned (or in-progress) certification.
///
/// Instance rows reference a catalog entry and belong to exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserCert {
    /// Unique identifier, allocated by the store.
    pub user_cert_id: i64,
    /// Owning user's id.
    pub user_id: i64,
    /// Catalog entry this instance refers to.
    pub certification_id: i64,
    /// Progress status, e.g. "earned" or "in_progress".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Date the certification was earned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earned_on: Option<NaiveDate>,
    /// Date the certification expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<NaiveDate>,
    /// Continuing-education hours required for renewal.
    pub ce_hours_required: i32,
    /// Continuing-education hours completed so far.
    pub ce_hours_completed: i32,
}

impl OwnedResource for UserCert {
    fn owner_id(&self) -> i64 {
        self.user_id
    }
}

/// A user certification joined with its catalog entry, as returned by
/// the read endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserCertView {
    /// Unique identifier of the instance row.
    pub user_cert_id: i64,
    /// Owning user's id.
    pub user_id: i64,
    /// Catalog entry this instance refers to.
    pub certification_id: i64,
    /// Progress status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Date the certification was earned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earned_on: Option<NaiveDate>,
    /// Date the certification expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<NaiveDate>,
    /// Continuing-education hours required for renewal.
    pub ce_hours_required: i32,
    /// Continuing-education hours completed so far.
    pub ce_hours_completed: i32,
    /// Catalog: display name.
    pub cert_name: String,
    /// Catalog: issuing organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Catalog: description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_description: Option<String>,
    /// Catalog: renewal period in months.
    pub renewal_period_months: i32,
}

impl UserCertView {
    /// Join an instance row with its catalog entry.
    pub fn joined(user_cert: &UserCert, certification: &Certification) -> Self {
        Self {
            user_cert_id: user_cert.user_cert_id,
            user_id: user_cert.user_id,
            certification_id: user_cert.certification_id,
            status: user_cert.status.clone(),
            earned_on: user_cert.earned_on,
            expires_on: user_cert.expires_on,
            ce_hours_required: user_cert.ce_hours_required,
            ce_hours_completed: user_cert.ce_hours_completed,
            cert_name: certification.cert_name.clone(),
            provider: certification.provider.clone(),
            cert_description: certification.cert_description.clone(),
            renewal_period_months: certification.renewal_period_months,
        }
    }
}

/// Request to create a user certification. Token travels in the body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserCertRequest {
    /// Bearer token of the acting user.
    #[serde(default)]
    pub token: Option<String>,
    /// Catalog entry being earned.
    pub certification_id: i64,
    /// Progress status.
    #[serde(default)]
    pub status: Option<String>,
    /// Date the certification was earned.
    #[serde(default)]
    pub earned_on: Option<NaiveDate>,
    /// Date the certification expires.
    #[serde(default)]
    pub expires_on: Option<NaiveDate>,
    /// Continuing-education hours required; defaults to 0.
    #[serde(default)]
    pub ce_hours_required: i32,
    /// Continuing-education hours completed; defaults to 0.
    #[serde(default)]
    pub ce_hours_completed: i32,
}

/// Request to replace a user certification's fields. Token travels in
/// the body; the target row comes from the path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserCertRequest {
    /// Bearer token of the acting user.
    #[serde(default)]
    pub token: Option<String>,
    /// Catalog entry being referenced.
    pub certification_id: i64,
    /// Progress status.
    #[serde(default)]
    pub status: Option<String>,
    /// Date the certification was earned.
    #[serde(default)]
    pub earned_on: Option<NaiveDate>,
    /// Date the certification expires.
    #[serde(default)]
    pub expires_on: Option<NaiveDate>,
    /// Continuing-education hours required; defaults to 0.
    #[serde(default)]
    pub ce_hours_required: i32,
    /// Continuing-education hours completed; defaults to 0.
    #[serde(default)]
    pub ce_hours_completed: i32,
}

/// Request to delete user certifications. Token travels in the body.
///
/// With `user_cert_id` present, deletes that row if owned; absent,
/// deletes every row owned by the acting user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteUserCertsRequest {
    /// Bearer token of the acting user.
    #[serde(default)]
    pub token: Option<String>,
    /// Specific row to delete; absent deletes all owned rows.
    #[serde(default)]
    pub user_cert_id: Option<i64>,
}

/// Query parameters for listing user certifications.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct UserCertQuery {
    /// Restrict the listing to a single owned row.
    pub user_cert_id: Option<i64>,
}

/// Response listing the acting user's certifications.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserCertListResponse {
    /// Owned rows, joined with their catalog entries.
    pub user_certifications: Vec<UserCertView>,
}

/// Response after a user certification mutation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserCertMutationResponse {
    /// Human-readable outcome message.
    pub message: String,
    /// Identifier of the affected row.
    pub user_cert_id: i64,
}

/// Response after a delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    /// Human-readable outcome message.
    pub message: String,
    /// Number of rows removed.
    pub rows_deleted: usize,
}
