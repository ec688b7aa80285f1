//! Continuation action menu.

use super::{ContinuationAction, WorkingTreeState};
use crate::text::TextKey;

/// One selectable menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    /// Action dispatched when the entry is chosen.
    pub action: ContinuationAction,
}

impl MenuItem {
    /// Text shown for the entry.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.action.as_str()
    }
}

/// Menu of continuation actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    /// Key of the menu title.
    pub title: TextKey,
    /// Entries in display order.
    pub items: Vec<MenuItem>,
}

impl Menu {
    /// Actions offered by the menu, in display order.
    pub fn actions(&self) -> impl Iterator<Item = ContinuationAction> + '_ {
        self.items.iter().map(|item| item.action)
    }
}

/// Build the action menu for `state`.
///
/// `continue` and `abort` are always offered. A merge has no commit to skip,
/// so `skip` only appears while rebasing.
#[must_use]
pub fn build_menu(state: WorkingTreeState) -> Menu {
    let mut actions = vec![ContinuationAction::Continue, ContinuationAction::Abort];
    if state == WorkingTreeState::Rebasing {
        actions.push(ContinuationAction::Skip);
    }

    let title = if state == WorkingTreeState::Merging {
        TextKey::MergeOptionsTitle
    } else {
        TextKey::RebaseOptionsTitle
    };

    Menu {
        title,
        items: actions
            .into_iter()
            .map(|action| MenuItem { action })
            .collect(),
    }
}
