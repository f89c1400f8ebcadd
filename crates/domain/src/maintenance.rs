// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire shapes for maintenance records.
//!
//! Field names follow the service contract exactly; note that the request
//! side spells the all-services flag `allservices` while the response side
//! spells it `allServices`.

use crate::window::TimeWindow;
use serde::{Deserialize, Serialize};

/// Payload for creating a maintenance record (the enable action).
///
/// One invocation covers exactly one host and one owner; the host doubles as
/// the maintenance name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    /// Maintenance name; always the target host.
    pub name: String,
    /// The hosts covered; always exactly one element.
    pub hosts: Vec<String>,
    /// Whether all services on the host are covered; always `true`.
    #[serde(rename = "allservices")]
    pub all_services: bool,
    /// Window start (RFC 3339).
    #[serde(rename = "startTime")]
    pub start_time: String,
    /// Window end (RFC 3339).
    #[serde(rename = "endTime")]
    pub end_time: String,
    /// The owners; always exactly one element.
    pub owners: Vec<String>,
    /// Human-readable comment attributing the maintenance.
    pub comment: String,
    /// RPD ticket number; 0 when no ticket is referenced.
    pub rpd: i64,
}

impl MaintenanceRequest {
    /// Builds the enable payload for `host`, attributed to `owner`.
    #[must_use]
    pub fn for_host(host: &str, window: TimeWindow, owner: &str, ticket: i64) -> Self {
        Self {
            name: host.to_string(),
            hosts: vec![host.to_string()],
            all_services: true,
            start_time: window.start_time,
            end_time: window.end_time,
            owners: vec![owner.to_string()],
            comment: format!("Automatic maintenance mode set by {owner}"),
            rpd: ticket,
        }
    }
}

/// One maintenance record as returned by the status query.
///
/// Every field defaults when absent; the service omits fields freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    /// Server-assigned record id.
    #[serde(rename = "maintenanceId", default)]
    pub maintenance_id: String,
    /// Maintenance name.
    #[serde(default)]
    pub name: String,
    /// Record type as reported by the service.
    #[serde(rename = "type", default)]
    pub record_type: String,
    /// The hosts covered.
    #[serde(default)]
    pub hosts: Vec<String>,
    /// Whether all services on the hosts are covered.
    #[serde(rename = "allServices", default)]
    pub all_services: bool,
    /// Window start (RFC 3339).
    #[serde(rename = "startTime", default)]
    pub start_time: String,
    /// Window end (RFC 3339).
    #[serde(rename = "endTime", default)]
    pub end_time: String,
    /// Who created the record.
    #[serde(rename = "createdBy", default)]
    pub created_by: String,
    /// When the record was created.
    #[serde(rename = "creationTime", default)]
    pub creation_time: String,
    /// Who last updated the record.
    #[serde(rename = "updatedBy", default)]
    pub updated_by: String,
    /// When the record was last updated.
    #[serde(rename = "updationTime", default)]
    pub updation_time: String,
    /// Current record status.
    #[serde(default)]
    pub status: String,
    /// The comment attached at creation.
    #[serde(default)]
    pub comment: String,
    /// RPD ticket number.
    #[serde(default)]
    pub rpd: i64,
}
