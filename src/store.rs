// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-process record store.
//!
//! Holds the user accounts, the certification catalog, and the per-user
//! certification rows behind the same observable semantics a relational
//! backend would give this API: a unique constraint on `username`, and
//! owner-scoped matching for every instance-row mutation.
//!
//! Instance-row lookups match id and owner together, so a row owned by
//! someone else is indistinguishable from a missing one. Catalog rows
//! have no owner and skip the check entirely.

use std::collections::HashMap;

use crate::auth::AuthenticatedUser;
use crate::error::ApiError;
use crate::models::{
    Certification, CreateCertificationRequest, CreateUserCertRequest, RegisterRequest,
    UpdateCertificationRequest, UpdateProfileRequest, UpdateUserCertRequest, User, UserCert,
    UserCertView,
};
use crate::ownership::authorize;

const USER_CERT_NOT_FOUND: &str = "User_cert not found or not owned";

#[derive(Default)]
pub struct InMemoryStore {
    users: HashMap<i64, User>,
    certifications: HashMap<i64, Certification>,
    user_certs: HashMap<i64, UserCert>,
    next_user_id: i64,
    next_certification_id: i64,
    next_user_cert_id: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Users
    // -------------------------------------------------------------------------

    /// Create a user account. The caller supplies the already-hashed
    /// password digest; the plaintext never reaches the store.
    pub fn create_user(
        &mut self,
        request: &RegisterRequest,
        password_digest: String,
    ) -> Result<User, ApiError> {
        if self.users.values().any(|u| u.username == request.username) {
            return Err(ApiError::conflict("Username already exists"));
        }

        self.next_user_id += 1;
        let user = User {
            user_id: self.next_user_id,
            username: request.username.clone(),
            password_digest,
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            industry: request.industry.clone(),
            user_role: request.user_role.clone(),
            bio: request.bio.clone(),
        };
        self.users.insert(user.user_id, user.clone());
        Ok(user)
    }

    pub fn user(&self, user_id: i64) -> Option<&User> {
        self.users.get(&user_id)
    }

    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.values().find(|u| u.username == username)
    }

    /// Apply the present fields of a profile update to the user's row.
    pub fn update_profile(
        &mut self,
        user_id: i64,
        update: &UpdateProfileRequest,
    ) -> Result<User, ApiError> {
        if update.is_empty() {
            return Err(ApiError::bad_request("No fields provided to update"));
        }

        let Some(user) = self.users.get_mut(&user_id) else {
            return Err(ApiError::not_found("User not found"));
        };

        if let Some(first_name) = &update.first_name {
            user.first_name = first_name.clone();
        }
        if let Some(last_name) = &update.last_name {
            user.last_name = last_name.clone();
        }
        if let Some(industry) = &update.industry {
            user.industry = industry.clone();
        }
        if let Some(user_role) = &update.user_role {
            user.user_role = user_role.clone();
        }
        if let Some(bio) = &update.bio {
            user.bio = Some(bio.clone());
        }

        Ok(user.clone())
    }

    // -------------------------------------------------------------------------
    // Certification catalog
    // -------------------------------------------------------------------------

    pub fn create_certification(&mut self, request: CreateCertificationRequest) -> Certification {
        self.next_certification_id += 1;
        let certification = Certification {
            certification_id: self.next_certification_id,
            domain_id: request.domain_id,
            cert_name: request.cert_name,
            provider: request.provider,
            cert_description: request.cert_description,
            renewal_period_months: request.renewal_period_months,
        };
        self.certifications
            .insert(certification.certification_id, certification.clone());
        certification
    }

    pub fn list_certifications(&self) -> Vec<Certification> {
        let mut certifications: Vec<Certification> =
            self.certifications.values().cloned().collect();
        certifications.sort_by_key(|c| c.certification_id);
        certifications
    }

    pub fn update_certification(
        &mut self,
        certification_id: i64,
        request: UpdateCertificationRequest,
    ) -> Result<Certification, ApiError> {
        let Some(certification) = self.certifications.get_mut(&certification_id) else {
            return Err(ApiError::not_found("Certification not found"));
        };

        certification.domain_id = request.domain_id;
        certification.cert_name = request.cert_name;
        certification.provider = request.provider;
        certification.cert_description = request.cert_description;
        certification.renewal_period_months = request.renewal_period_months;

        Ok(certification.clone())
    }

    pub fn delete_certification(&mut self, certification_id: i64) -> Result<(), ApiError> {
        if self.certifications.remove(&certification_id).is_some() {
            Ok(())
        } else {
            Err(ApiError::not_found("Certification not found"))
        }
    }

    // -------------------------------------------------------------------------
    // User certifications
    // -------------------------------------------------------------------------

    /// Create an instance row owned by the acting user.
    pub fn create_user_cert(
        &mut self,
        identity: &AuthenticatedUser,
        request: &CreateUserCertRequest,
    ) -> Result<UserCert, ApiError> {
        if !self.certifications.contains_key(&request.certification_id) {
            return Err(ApiError::not_found("Certification not found"));
        }

        self.next_user_cert_id += 1;
        let row = UserCert {
            user_cert_id: self.next_user_cert_id,
            user_id: identity.user_id,
            certification_id: request.certification_id,
            status: request.status.clone(),
            earned_on: request.earned_on,
            expires_on: request.expires_on,
            ce_hours_required: request.ce_hours_required,
            ce_hours_completed: request.ce_hours_completed,
        };
        self.user_certs.insert(row.user_cert_id, row.clone());
        Ok(row)
    }

    /// List the acting user's rows joined with their catalog entries,
    /// optionally restricted to a single row.
    pub fn list_user_certs(
        &self,
        identity: &AuthenticatedUser,
        user_cert_id: Option<i64>,
    ) -> Vec<UserCertView> {
        let mut rows: Vec<UserCertView> = self
            .user_certs
            .values()
            .filter(|row| authorize(identity, *row))
            .filter(|row| user_cert_id.is_none_or(|id| row.user_cert_id == id))
            .filter_map(|row| {
                self.certifications
                    .get(&row.certification_id)
                    .map(|certification| UserCertView::joined(row, certification))
            })
            .collect();
        rows.sort_by_key(|row| row.user_cert_id);
        rows
    }

    /// Replace an owned row's fields. A row owned by someone else reports
    /// the same not-found condition as a missing one.
    pub fn update_user_cert(
        &mut self,
        identity: &AuthenticatedUser,
        user_cert_id: i64,
        request: &UpdateUserCertRequest,
    ) -> Result<UserCert, ApiError> {
        if !self.certifications.contains_key(&request.certification_id) {
            return Err(ApiError::not_found("Certification not found"));
        }

        let Some(row) = self.user_certs.get_mut(&user_cert_id) else {
            return Err(ApiError::not_found(USER_CERT_NOT_FOUND));
        };
        if !authorize(identity, row) {
            return Err(ApiError::not_found(USER_CERT_NOT_FOUND));
        }

        row.certification_id = request.certification_id;
        row.status = request.status.clone();
        row.earned_on = request.earned_on;
        row.expires_on = request.expires_on;
        row.ce_hours_required = request.ce_hours_required;
        row.ce_hours_completed = request.ce_hours_completed;

        Ok(row.clone())
    }

    /// Delete one owned row, or every row owned by the acting user when
    /// no id is given. Zero rows affected reports as not found.
    pub fn delete_user_certs(
        &mut self,
        identity: &AuthenticatedUser,
        user_cert_id: Option<i64>,
    ) -> Result<usize, ApiError> {
        let removed = match user_cert_id {
            Some(id) => match self.user_certs.get(&id) {
                Some(row) if authorize(identity, row) => {
                    self.user_certs.remove(&id);
                    1
                }
                _ => 0,
            },
            None => {
                let before = self.user_certs.len();
                self.user_certs.retain(|_, row| !authorize(identity, row));
                before - self.user_certs.len()
            }
        };

        if removed == 0 {
            return Err(ApiError::not_found("No records found to delete"));
        }
        Ok(removed)
    }
}
