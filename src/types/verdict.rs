//! Verdict - the tri-state comparison outcome for a pair

use serde::Serialize;

/// Comparison outcome for one pair of sources.
///
/// Every pair starts out `Unknown` and transitions exactly once to either
/// `NotMatched` or `Matched`. Both decided states are terminal: no later
/// round re-examines a decided pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The pair has not been decided yet.
    #[default]
    Unknown,

    /// The streams differ: in content, in length, or one side failed to read.
    NotMatched,

    /// Both streams were exhausted with every block equal.
    Matched,
}

impl Verdict {
    /// Whether this verdict is decided and may never change again.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::Unknown)
    }
}
