// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `JWT_KEY` | Symmetric secret for token signing | Required |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use thiserror::Error;

/// Environment variable name for the token signing secret.
///
/// The secret is read once at startup and held read-only for the lifetime
/// of the process. The process must not start without it.
pub const JWT_KEY_ENV: &str = "JWT_KEY";

/// Environment variable name for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Environment variable name for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable name for the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Fatal startup-time configuration failures.
///
/// These abort initialization and are never surfaced per-request.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The token signing secret is absent or empty.
    #[error("JWT_KEY environment variable is not set")]
    MissingJwtKey,
}
