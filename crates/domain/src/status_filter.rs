// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// The maintenance record statuses the service accepts as a query filter.
///
/// Any other value is rejected before a request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Maintenance currently in effect.
    Active,
    /// Maintenance whose window has passed.
    Completed,
    /// Maintenance whose window has not started yet.
    Scheduled,
    /// Maintenance that was deleted.
    Deleted,
}

impl StatusFilter {
    /// The lowercase wire form used in the query string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Scheduled => "scheduled",
            Self::Deleted => "deleted",
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "scheduled" => Ok(Self::Scheduled),
            "deleted" => Ok(Self::Deleted),
            other => Err(DomainError::InvalidStatusFilter(other.to_string())),
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
