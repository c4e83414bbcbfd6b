// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! This module provides password hashing and JWT authentication for the
//! CertTrack API.
//!
//! ## Auth Flow
//!
//! 1. A user registers or logs in with username/password
//! 2. The server verifies the password digest and issues an HS256 JWT
//!    carrying the user's id (`sub`) and username
//! 3. Protected operations locate the token (Authorization header or a
//!    `token` body field, fixed per operation), validate signature and
//!    expiry, and bind the extracted identity for the rest of the request
//!
//! ## Security
//!
//! - The signing secret is process-wide, read once at startup
//! - Tokens expire after one hour; there is no server-side revocation
//! - Validation is a purely local cryptographic and time check

pub mod claims;
pub mod error;
pub mod extractor;
pub mod hashing;
pub mod token;

pub use claims::AuthenticatedUser;
pub use error::AuthError;
pub use extractor::{authorize_body_token, Auth};
pub use token::{TokenService, TOKEN_TTL_SECS};
