// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Action selection from the four independent action flags.
//!
//! The flags are not mutually exclusive on the command line; selection uses
//! a fixed priority order (enable, disable, disable-all, get-status). When
//! more than one flag is set, the highest-priority action runs and a warning
//! is emitted instead of failing, preserving the historical contract.

use tracing::warn;

/// The four things one invocation can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Create a maintenance record for a host.
    Enable,
    /// Delete one maintenance record by id.
    Disable,
    /// Delete all maintenance records for a host.
    DisableAll,
    /// List maintenance records for a host.
    GetStatus,
}

impl Action {
    /// Selects the action from the raw flags, or `None` when no action flag
    /// is set (the invocation is then a successful no-op).
    #[must_use]
    #[allow(clippy::fn_params_excessive_bools)]
    pub fn select(enable: bool, disable: bool, disable_all: bool, get_status: bool) -> Option<Self> {
        let set: usize = [enable, disable, disable_all, get_status]
            .iter()
            .filter(|flag| **flag)
            .count();

        let chosen: Option<Self> = if enable {
            Some(Self::Enable)
        } else if disable {
            Some(Self::Disable)
        } else if disable_all {
            Some(Self::DisableAll)
        } else if get_status {
            Some(Self::GetStatus)
        } else {
            None
        };

        if set > 1 {
            warn!(
                flags_set = set,
                action = ?chosen,
                "Multiple action flags set; running the highest-priority one"
            );
        }

        chosen
    }
}

#[cfg(test)]
mod tests {
    use super::Action;

    #[test]
    fn test_no_flags_is_no_action() {
        assert_eq!(Action::select(false, false, false, false), None);
    }

    #[test]
    fn test_single_flags_select_their_action() {
        assert_eq!(
            Action::select(true, false, false, false),
            Some(Action::Enable)
        );
        assert_eq!(
            Action::select(false, true, false, false),
            Some(Action::Disable)
        );
        assert_eq!(
            Action::select(false, false, true, false),
            Some(Action::DisableAll)
        );
        assert_eq!(
            Action::select(false, false, false, true),
            Some(Action::GetStatus)
        );
    }

    #[test]
    fn test_precedence_enable_wins() {
        assert_eq!(
            Action::select(true, true, true, true),
            Some(Action::Enable)
        );
    }

    #[test]
    fn test_precedence_disable_over_later_flags() {
        assert_eq!(
            Action::select(false, true, true, true),
            Some(Action::Disable)
        );
        assert_eq!(
            Action::select(false, false, true, true),
            Some(Action::DisableAll)
        );
    }
}
