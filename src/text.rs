//! User-facing strings.
//!
//! The continuation core only ever selects a [`TextKey`]; the words come from
//! a lookup table so the front end can swap languages.

/// Identifier of a user-facing string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    /// Title of the action menu during a merge.
    MergeOptionsTitle,
    /// Title of the action menu during a rebase.
    RebaseOptionsTitle,
    /// Title of the conflict prompt.
    FoundConflictsTitle,
    /// Body of the conflict prompt.
    FoundConflicts,
    /// Error shown when an action is chosen with nothing in progress.
    NotMergingOrRebasing,
}

/// English text for `key`.
#[must_use]
pub const fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::MergeOptionsTitle => "Merge Options",
        TextKey::RebaseOptionsTitle => "Rebase Options",
        TextKey::FoundConflictsTitle => "Auto-merge failed",
        TextKey::FoundConflicts => {
            "Conflicts! To abort press 'esc', otherwise press 'enter' and resolve them in the files panel"
        }
        TextKey::NotMergingOrRebasing => "You are currently neither rebasing nor merging",
    }
}
