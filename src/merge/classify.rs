//! Classification of git's failure messages.

use super::ContinuationAction;

/// Result of a single git invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Git exited successfully.
    Success,
    /// Git failed with the given message.
    Failure(String),
}

/// What to do after a continuation action ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryDecision {
    /// Nothing more to do.
    TreatAsSuccess,
    /// Dispatch the given action instead.
    RetryAs(ContinuationAction),
    /// Git says there is nothing in progress; the operation already finished.
    AlreadyDone,
    /// The user has to resolve conflicts before going on.
    NeedsManualResolution,
    /// Show git's message to the user as is.
    Unrecoverable(String),
}

#[derive(Debug, Clone, Copy)]
enum Verdict {
    Retry(ContinuationAction),
    AlreadyDone,
    NeedsManualResolution,
}

#[derive(Debug)]
struct Rule {
    patterns: &'static [&'static str],
    verdict: Verdict,
}

/// Checked top to bottom; the first rule with a matching pattern decides.
static RULES: [Rule; 4] = [
    Rule {
        patterns: &["No changes - did you forget to use"],
        verdict: Verdict::Retry(ContinuationAction::Skip),
    },
    Rule {
        patterns: &["The previous cherry-pick is now empty"],
        verdict: Verdict::Retry(ContinuationAction::Continue),
    },
    Rule {
        patterns: &["No rebase in progress?"],
        verdict: Verdict::AlreadyDone,
    },
    Rule {
        patterns: &[
            "When you have resolved this problem",
            "fix conflicts",
            "Resolve all conflicts manually",
        ],
        verdict: Verdict::NeedsManualResolution,
    },
];

/// Decide how to recover from `outcome`.
///
/// Matching is case-sensitive substring containment.
#[must_use]
pub fn classify(outcome: &CommandOutcome) -> RecoveryDecision {
    let CommandOutcome::Failure(message) = outcome else {
        return RecoveryDecision::TreatAsSuccess;
    };

    let matched = RULES.iter().find(|rule| {
        rule.patterns
            .iter()
            .any(|pattern| message.contains(pattern))
    });

    match matched.map(|rule| rule.verdict) {
        Some(Verdict::Retry(action)) => RecoveryDecision::RetryAs(action),
        Some(Verdict::AlreadyDone) => RecoveryDecision::AlreadyDone,
        Some(Verdict::NeedsManualResolution) => RecoveryDecision::NeedsManualResolution,
        None => RecoveryDecision::Unrecoverable(message.clone()),
    }
}
