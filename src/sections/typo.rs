//! Typo section - rejects passwords shaped like a common human habit.

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::settings::PolicySettings;
use crate::verdict::Verdict;

/// Returns `true` when `pattern` matches `candidate`.
pub fn matches_common_typo(candidate: &str, pattern: &Regex) -> bool {
    pattern.is_match(candidate)
}

/// Checks the password against the configured typo pattern.
///
/// # Returns
/// - `Some(Verdict::CommonTypoShape)` if the pattern matches
/// - `None` if the password has another shape
pub fn common_typo_section(
    password: &SecretString,
    settings: &PolicySettings,
    _should_stop: &dyn Fn() -> bool,
) -> SectionResult {
    if matches_common_typo(password.expose_secret(), &settings.typo_pattern) {
        return Some(Verdict::CommonTypoShape);
    }
    None
}
