//! Compliance rules
//!
//! Each section checks one aspect of the policy. The checker runs them in a
//! fixed order and stops at the first failure.

mod dictionary;
mod empty;
mod length;
mod typo;
mod variety;

pub use dictionary::dictionary_section;
pub use empty::empty_section;
pub use length::length_section;
pub use typo::{common_typo_section, matches_common_typo};
pub use variety::{character_variety_section, has_required_classes};

use secrecy::SecretString;

use crate::settings::PolicySettings;

/// Result type for section functions.
/// - `Some(verdict)` - Section failed with this verdict
/// - `None` - Section passed
pub type SectionResult = Option<crate::verdict::Verdict>;

/// Signature shared by every section; the last argument reports whether the
/// caller asked to stop.
pub type Section = fn(&SecretString, &PolicySettings, &dyn Fn() -> bool) -> SectionResult;

#[cfg(test)]
pub(crate) fn test_settings(wordlist: &std::path::Path) -> PolicySettings {
    PolicySettings::new(
        8,
        10,
        "abcABC123",
        wordlist,
        3,
        crate::settings::DEFAULT_TYPO_PATTERN,
    )
    .expect("valid test settings")
}
