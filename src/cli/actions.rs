use crate::commands::{self, Invocation};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    /// User-facing; runs behind the invocation guard and ignore merge.
    Command,
    /// Self-tests and diagnostics.
    Debug,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Save,
    Restore,
    OpenDataDir,
    CreateTestSession,
    RestoreTestSession,
    TestMergeUserIgnore,
    GuardWinVer,
}

pub type Handler = fn(&Invocation) -> Result<i32>;

pub struct ActionSpec {
    pub action: Action,
    pub long: &'static str,
    pub short: &'static str,
    pub category: ActionCategory,
    pub handler: Handler,
}

pub const ACTIONS: &[ActionSpec] = &[
    ActionSpec {
        action: Action::Save,
        long: "save",
        short: "s",
        category: ActionCategory::Command,
        handler: commands::save,
    },
    ActionSpec {
        action: Action::Restore,
        long: "restore",
        short: "r",
        category: ActionCategory::Command,
        handler: commands::restore,
    },
    ActionSpec {
        action: Action::OpenDataDir,
        long: "open-data-dir",
        short: "odd",
        category: ActionCategory::Command,
        handler: commands::open_data_dir,
    },
    ActionSpec {
        action: Action::CreateTestSession,
        long: "create-test-session",
        short: "cts",
        category: ActionCategory::Debug,
        handler: commands::create_test_session,
    },
    ActionSpec {
        action: Action::RestoreTestSession,
        long: "restore-test-session",
        short: "rts",
        category: ActionCategory::Debug,
        handler: commands::restore_test_session,
    },
    ActionSpec {
        action: Action::TestMergeUserIgnore,
        long: "test-merge-user-ignore",
        short: "tmui",
        category: ActionCategory::Debug,
        handler: commands::test_merge_user_ignore,
    },
    ActionSpec {
        action: Action::GuardWinVer,
        long: "guard-win-ver",
        short: "gwv",
        category: ActionCategory::Debug,
        handler: commands::guard_win_ver,
    },
];

impl Action {
    /// Looks up an action by its long or short alias.
    pub fn parse(alias: &str) -> Option<Action> {
        ACTIONS
            .iter()
            .find(|spec| spec.long == alias || spec.short == alias)
            .map(|spec| spec.action)
    }

    pub fn spec(self) -> &'static ActionSpec {
        ACTIONS
            .iter()
            .find(|spec| spec.action == self)
            .unwrap_or_else(|| unreachable!("every action has a table entry"))
    }

    pub fn long(self) -> &'static str {
        self.spec().long
    }

    pub fn category(self) -> ActionCategory {
        self.spec().category
    }

    pub fn requires_session_name(self) -> bool {
        matches!(self, Action::Save | Action::Restore)
    }
}

/// Every alias of a category, long form first.
pub fn aliases(category: ActionCategory) -> Vec<&'static str> {
    ACTIONS
        .iter()
        .filter(|spec| spec.category == category)
        .flat_map(|spec| [spec.long, spec.short])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_aliases_are_unique() {
        let mut seen = HashSet::new();
        for spec in ACTIONS {
            assert!(seen.insert(spec.long), "duplicate alias {}", spec.long);
            assert!(seen.insert(spec.short), "duplicate alias {}", spec.short);
        }
    }

    #[test]
    fn test_every_action_round_trips_through_spec() {
        for spec in ACTIONS {
            assert_eq!(spec.action.spec().long, spec.long);
        }
    }

    #[test]
    fn test_category_aliases() {
        assert_eq!(
            aliases(ActionCategory::Command),
            vec!["save", "s", "restore", "r", "open-data-dir", "odd"]
        );
        assert_eq!(aliases(ActionCategory::Debug).len(), 8);
    }
}
