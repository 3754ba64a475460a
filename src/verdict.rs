//! Outcome of a compliance check.

use std::fmt;

/// Why a candidate passed or failed the policy.
///
/// Rules run in a fixed order and the first failure wins, so a given
/// candidate and settings pair always maps to the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Every rule passed.
    Ok,
    /// The password is empty.
    Empty,
    /// Fewer characters than `min_len`.
    TooShort,
    /// Lacks a lowercase letter, an uppercase letter or a digit.
    MissingCharacterClass,
    /// Matches the configured typo pattern.
    CommonTypoShape,
    /// A wordlist entry is closer than `edit_distance_floor`.
    TooCloseToDictionaryWord,
    /// The wordlist could not be opened or read.
    DictionaryUnavailable,
    /// The settings break one of their invariants.
    InvalidSettings,
    /// The caller cancelled the evaluation before it finished.
    Cancelled,
}

impl Verdict {
    /// Returns `true` only for [`Verdict::Ok`].
    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Ok)
    }

    /// Human-readable explanation of the verdict.
    pub fn reason(&self) -> &'static str {
        match self {
            Verdict::Ok => "Password complies with the policy",
            Verdict::Empty => "Password is empty",
            Verdict::TooShort => "Password is shorter than the minimum length",
            Verdict::MissingCharacterClass => {
                "Password needs at least one lowercase letter, one uppercase letter and one digit"
            }
            Verdict::CommonTypoShape => "Password follows a common predictable shape",
            Verdict::TooCloseToDictionaryWord => "Password is too close to a dictionary word",
            Verdict::DictionaryUnavailable => "Wordlist could not be read",
            Verdict::InvalidSettings => "Policy settings are invalid",
            Verdict::Cancelled => "Evaluation cancelled",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}
