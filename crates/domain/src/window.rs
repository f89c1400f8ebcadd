// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Maintenance window calculation.
//!
//! A window is anchored at the moment the enable action runs and extends for
//! the requested number of hours. Both endpoints are carried as RFC 3339
//! strings with the anchor's timezone offset and whole-second precision.
//!
//! ## Invariants
//!
//! - `end_time` is always `start_time` plus `trunc(timeout_hours * 3600)`
//!   seconds
//! - The timeout must be a positive, finite number of hours

use crate::error::DomainError;
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

/// A computed maintenance window, ready for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    /// Window start (RFC 3339, with offset).
    pub start_time: String,
    /// Window end (RFC 3339, with offset).
    pub end_time: String,
}

/// Computes the maintenance window anchored at `now`.
///
/// The duration is `timeout_hours * 3600` seconds, truncated toward zero to
/// whole seconds. Sub-second precision of the anchor is dropped so both
/// endpoints format without a fractional component.
///
/// # Errors
///
/// Returns an error if `timeout_hours` is not a positive finite number, if
/// the resulting end time does not fit in the calendar, or if either
/// endpoint fails to format.
pub fn maintenance_window(
    now: OffsetDateTime,
    timeout_hours: f64,
) -> Result<TimeWindow, DomainError> {
    if !timeout_hours.is_finite() || timeout_hours <= 0.0 {
        return Err(DomainError::InvalidTimeout {
            value: timeout_hours.to_string(),
        });
    }

    // Truncation toward zero is the intended rounding rule.
    #[allow(clippy::cast_possible_truncation)]
    let seconds: i64 = (timeout_hours * 3600.0) as i64;

    // Nanosecond zero is always in range, so the fallback never fires.
    let start: OffsetDateTime = now.replace_nanosecond(0).unwrap_or(now);
    let end: OffsetDateTime = start
        .checked_add(Duration::seconds(seconds))
        .ok_or(DomainError::WindowOverflow { seconds })?;

    Ok(TimeWindow {
        start_time: format_rfc3339(start)?,
        end_time: format_rfc3339(end)?,
    })
}

/// Formats a timestamp as RFC 3339, mapping the error into the domain.
fn format_rfc3339(value: OffsetDateTime) -> Result<String, DomainError> {
    value
        .format(&Rfc3339)
        .map_err(|err| DomainError::TimestampFormat {
            message: err.to_string(),
        })
}
