// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The maintenance timeout is not a positive number of hours.
    InvalidTimeout {
        /// The rejected timeout value, rendered as supplied.
        value: String,
    },
    /// The status filter is not part of the accepted vocabulary.
    InvalidStatusFilter(String),
    /// A timestamp could not be formatted as RFC 3339.
    TimestampFormat {
        /// The formatting error message.
        message: String,
    },
    /// Adding the maintenance duration to the anchor time overflowed.
    WindowOverflow {
        /// The duration in seconds that could not be applied.
        seconds: i64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimeout { value } => {
                write!(f, "Invalid timeout: {value}. Must be a positive number of hours")
            }
            Self::InvalidStatusFilter(value) => {
                write!(
                    f,
                    "Invalid status '{value}'. Must be one of active, completed, scheduled, deleted"
                )
            }
            Self::TimestampFormat { message } => {
                write!(f, "Failed to format timestamp: {message}")
            }
            Self::WindowOverflow { seconds } => {
                write!(f, "Maintenance window of {seconds} seconds overflows the calendar")
            }
        }
    }
}

impl std::error::Error for DomainError {}
