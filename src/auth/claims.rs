// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authenticated identity extracted from a validated token.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Authenticated user information extracted from a validated JWT.
///
/// This is the primary type used throughout the application to represent
/// the authenticated user making a request. It is scoped to a single
/// request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    /// Canonical user id (the token's `sub` claim, parsed)
    pub user_id: i64,

    /// Username carried in the token
    pub username: String,

    /// Token expiration (Unix timestamp, used for logging, not serialized)
    #[serde(skip)]
    pub expires_at: i64,
}
