// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the client layer.

use icinga_maint_domain::DomainError;
use thiserror::Error;

/// Errors that can occur while preparing or executing a REST request.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The config file could not be read or parsed.
    #[error("Cannot load config file {path} - {message}")]
    Config {
        /// The config file path as supplied.
        path: String,
        /// The underlying read or parse error.
        message: String,
    },

    /// A disable-by-id request was attempted without a maintenance id.
    #[error("Maintenance id must be provided for deletion!")]
    MissingMaintenanceId,

    /// The target host has no DNS address records.
    #[error("Host: {host} not found!")]
    HostUnresolvable {
        /// The hostname that failed to resolve.
        host: String,
    },

    /// The enable payload could not be serialized.
    #[error("Failed to serialize maintenance request: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The transport failed (connect, TLS, timeout, request-time DNS).
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// A domain rule was violated.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
