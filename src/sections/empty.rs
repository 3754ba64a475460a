//! Empty section - rejects an empty password.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::settings::PolicySettings;
use crate::verdict::Verdict;

/// Rejects a zero-length password.
///
/// # Returns
/// - `Some(Verdict::Empty)` if the password is empty
/// - `None` otherwise
pub fn empty_section(
    password: &SecretString,
    _settings: &PolicySettings,
    _should_stop: &dyn Fn() -> bool,
) -> SectionResult {
    if password.expose_secret().is_empty() {
        return Some(Verdict::Empty);
    }
    None
}
