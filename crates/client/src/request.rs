// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! REST request construction.
//!
//! Each of the four actions maps to one constructor producing a
//! [`PreparedRequest`]: the resolved method, URL, and optional body, with no
//! transport involved. Validation that must happen before any network call
//! (a present maintenance id, a positive window) lives here or upstream of
//! here, never in the executor.

use crate::error::ClientError;
use crate::settings::Settings;
use icinga_maint_domain::{MaintenanceRequest, StatusFilter, TimeWindow};

/// The HTTP methods the service API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Read a resource.
    Get,
    /// Create a resource.
    Post,
    /// Delete a resource.
    Delete,
}

/// A fully resolved outbound request, ready for execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The absolute target URL.
    pub url: String,
    /// The serialized JSON body, when the action carries one.
    pub body: Option<String>,
}

impl PreparedRequest {
    /// Builds the enable request: POST the maintenance payload for `host`.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload fails to serialize.
    pub fn enable(
        settings: &Settings,
        host: &str,
        window: TimeWindow,
        ticket: i64,
    ) -> Result<Self, ClientError> {
        let payload: MaintenanceRequest =
            MaintenanceRequest::for_host(host, window, &settings.owner, ticket);
        Ok(Self {
            method: HttpMethod::Post,
            url: format!("{}host", settings.base_url),
            body: Some(serde_json::to_string(&payload)?),
        })
    }

    /// Builds the disable-by-id request: DELETE the record at `id`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::MissingMaintenanceId` when `id` is empty; no
    /// request reaches the wire in that case.
    pub fn disable(settings: &Settings, id: &str) -> Result<Self, ClientError> {
        if id.is_empty() {
            return Err(ClientError::MissingMaintenanceId);
        }
        Ok(Self {
            method: HttpMethod::Delete,
            url: format!("{}{id}", settings.base_url),
            body: None,
        })
    }

    /// Builds the disable-all request: DELETE every maintenance for `host`.
    #[must_use]
    pub fn disable_all(settings: &Settings, host: &str) -> Self {
        Self {
            method: HttpMethod::Delete,
            url: format!("{}host/{host}", settings.base_url),
            body: None,
        }
    }

    /// Builds the status query: GET maintenances for `host` filtered by
    /// `filter`.
    #[must_use]
    pub fn status(settings: &Settings, host: &str, filter: StatusFilter) -> Self {
        Self {
            method: HttpMethod::Get,
            url: format!("{}host/all/{host}?status={filter}", settings.base_url),
            body: None,
        }
    }
}
