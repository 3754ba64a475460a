//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::settings::PolicySettings;
use crate::verdict::Verdict;

/// Checks the password against `settings.min_len`, counted in characters.
///
/// # Returns
/// - `Some(Verdict::TooShort)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(
    password: &SecretString,
    settings: &PolicySettings,
    _should_stop: &dyn Fn() -> bool,
) -> SectionResult {
    if password.expose_secret().chars().count() < settings.min_len {
        return Some(Verdict::TooShort);
    }
    None
}
