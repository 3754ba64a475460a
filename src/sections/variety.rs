//! Character variety section - requires lowercase, uppercase and digits.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::settings::PolicySettings;
use crate::verdict::Verdict;

/// Returns `true` when `pwd` holds at least one ASCII lowercase letter, one
/// ASCII uppercase letter and one ASCII digit.
pub fn has_required_classes(pwd: &str) -> bool {
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    has_lower && has_upper && has_digit
}

/// Checks that the password mixes lowercase, uppercase and digits.
///
/// # Returns
/// - `Some(Verdict::MissingCharacterClass)` if any of the three is missing
/// - `None` if all three are present
pub fn character_variety_section(
    password: &SecretString,
    _settings: &PolicySettings,
    _should_stop: &dyn Fn() -> bool,
) -> SectionResult {
    if !has_required_classes(password.expose_secret()) {
        return Some(Verdict::MissingCharacterClass);
    }
    None
}
