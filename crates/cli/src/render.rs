// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rendering of status query responses.
//!
//! Each record prints as a labeled block, 1-indexed, fields in the order the
//! service documents them. Rendering goes through a `fmt::Write` sink so the
//! exact output is testable; `main` decides whether the sink reaches stdout.

use icinga_maint_domain::MaintenanceRecord;
use std::fmt::Write;

/// Parses the status response body as a list of maintenance records.
///
/// # Errors
///
/// Returns the underlying JSON error when the body is not a well-formed
/// record list. An empty list is not an error.
pub fn parse_records(body: &str) -> Result<Vec<MaintenanceRecord>, serde_json::Error> {
    serde_json::from_str(body)
}

/// Writes one labeled block per record into `out`.
///
/// # Errors
///
/// Propagates formatting errors from the sink; writing to a `String` never
/// fails.
pub fn render_records<W: Write>(records: &[MaintenanceRecord], out: &mut W) -> std::fmt::Result {
    for (index, record) in records.iter().enumerate() {
        let all_services: &str = if record.all_services { "true" } else { "false" };
        writeln!(out)?;
        writeln!(out, " ------------- Maintenance #{} -------------", index + 1)?;
        writeln!(out, "maintenanceId: {}", record.maintenance_id)?;
        writeln!(out, "name: {}", record.name)?;
        writeln!(out, "type: {}", record.record_type)?;
        writeln!(out, "hosts: {}", record.hosts.join(","))?;
        writeln!(out, "allServices: {all_services}")?;
        writeln!(out, "startTime: {}", record.start_time)?;
        writeln!(out, "endTime: {}", record.end_time)?;
        writeln!(out, "createdBy: {}", record.created_by)?;
        writeln!(out, "creationTime: {}", record.creation_time)?;
        writeln!(out, "updatedBy: {}", record.updated_by)?;
        writeln!(out, "updationTime: {}", record.updation_time)?;
        writeln!(out, "status: {}", record.status)?;
        writeln!(out, "comment: {}", record.comment)?;
        writeln!(out, "rpd: {}", record.rpd)?;
    }
    Ok(())
}
