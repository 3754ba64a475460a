//! Compliance checker - runs the policy rules in order.

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::sync::Arc;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    Section, character_variety_section, common_typo_section, dictionary_section, empty_section,
    length_section,
};
use crate::settings::{PolicySettings, validate_settings};
use crate::verdict::Verdict;

/// Checks a password against the policy and returns the first failing rule.
///
/// Rules run in this order: settings validity, empty, minimum length,
/// character classes, typo shape, dictionary distance.
///
/// # Arguments
/// * `settings` - Validated policy settings
/// * `password` - The candidate to check
/// * `token` - Optional cancellation token (async feature only)
pub fn check_password(
    settings: &PolicySettings,
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Verdict {
    #[cfg(feature = "async")]
    let should_stop = || token.as_ref().is_some_and(|t| t.is_cancelled());

    #[cfg(not(feature = "async"))]
    let should_stop = || false;

    run_sections(settings, password, &should_stop)
}

pub(crate) fn run_sections(
    settings: &PolicySettings,
    password: &SecretString,
    should_stop: &dyn Fn() -> bool,
) -> Verdict {
    if !validate_settings(settings).is_ok() {
        return Verdict::InvalidSettings;
    }

    // Orchestrator: first failing section wins
    let sections: [(&str, Section); 5] = [
        ("empty", empty_section),
        ("length", length_section),
        ("variety", character_variety_section),
        ("typo", common_typo_section),
        ("dictionary", dictionary_section),
    ];

    for (_section_name, section_fn) in sections {
        if should_stop() {
            return Verdict::Cancelled;
        }

        if let Some(verdict) = section_fn(password, settings, should_stop) {
            #[cfg(feature = "tracing")]
            tracing::debug!("Password rejected by section {}: {:?}", _section_name, verdict);
            return verdict;
        }
    }

    Verdict::Ok
}

/// Async version that runs the check on the blocking pool and sends the
/// verdict via channel.
///
/// If the blocking task fails (panic or runtime shutdown) nothing is sent and
/// `tx` is dropped, so the receiver sees the channel close with no verdict.
#[cfg(feature = "async")]
pub async fn check_password_tx(
    settings: Arc<PolicySettings>,
    password: SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Verdict>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("password check is about to start...");

    let handle =
        tokio::task::spawn_blocking(move || check_password(&settings, &password, Some(token)));

    let verdict = match handle.await {
        Ok(verdict) => verdict,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Password check task failed: {}", _e);
            return;
        }
    };

    if let Err(_e) = tx.send(verdict).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password check result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DEFAULT_TYPO_PATTERN;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn setup_with_tempfile(words: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for word in words {
            writeln!(temp_file, "{}", word).expect("Failed to write");
        }
        temp_file
    }

    fn settings_for(wordlist: &NamedTempFile) -> PolicySettings {
        PolicySettings::new(8, 10, "abcABC123", wordlist.path(), 3, DEFAULT_TYPO_PATTERN)
            .expect("valid settings")
    }

    fn check(settings: &PolicySettings, pwd: &str) -> Verdict {
        let pwd = SecretString::new(pwd.to_string().into());

        #[cfg(feature = "async")]
        let verdict = check_password(settings, &pwd, None);

        #[cfg(not(feature = "async"))]
        let verdict = check_password(settings, &pwd);

        verdict
    }

    #[test]
    fn test_check_compliant_password() {
        let wordlist = setup_with_tempfile(&["password"]);
        let settings = settings_for(&wordlist);
        assert_eq!(check(&settings, "Xk7mQ92pL"), Verdict::Ok);
    }

    #[test]
    fn test_check_common_typo_shape() {
        let wordlist = setup_with_tempfile(&["password"]);
        let settings = settings_for(&wordlist);
        assert_eq!(check(&settings, "Password1"), Verdict::CommonTypoShape);
    }

    #[test]
    fn test_check_too_close_to_dictionary_word() {
        let wordlist = setup_with_tempfile(&["password"]);
        let settings = settings_for(&wordlist);
        assert_eq!(check(&settings, "pAssword1"), Verdict::TooCloseToDictionaryWord);
    }

    #[test]
    fn test_check_empty_wins_over_everything() {
        let mut settings = settings_for(&setup_with_tempfile(&["password"]));
        assert_eq!(check(&settings, ""), Verdict::Empty);

        // Still Empty with an unreadable wordlist
        settings.wordlist_path = "/nonexistent/path/wordlist.txt".into();
        assert_eq!(check(&settings, ""), Verdict::Empty);
    }

    #[test]
    fn test_check_one_below_min_len() {
        let wordlist = setup_with_tempfile(&["password"]);
        let settings = settings_for(&wordlist);
        assert_eq!(check(&settings, "Xk7mQ92"), Verdict::TooShort);
        assert_eq!(check(&settings, "aaaaaaa"), Verdict::TooShort);
        assert_eq!(check(&settings, "Passwo1"), Verdict::TooShort);
    }

    #[test]
    fn test_check_missing_character_class() {
        let wordlist = setup_with_tempfile(&["password"]);
        let settings = settings_for(&wordlist);
        assert_eq!(check(&settings, "passwordd"), Verdict::MissingCharacterClass);
        assert_eq!(check(&settings, "XKMQPLZZ9"), Verdict::MissingCharacterClass);
    }

    #[test]
    fn test_check_variety_before_typo() {
        let wordlist = setup_with_tempfile(&["password"]);
        let mut settings = settings_for(&wordlist);
        settings.typo_pattern = regex::Regex::new(".*").unwrap();
        assert_eq!(check(&settings, "alllowercase"), Verdict::MissingCharacterClass);
        assert_eq!(check(&settings, "Xk7mQ92pL"), Verdict::CommonTypoShape);
    }

    #[test]
    fn test_check_distance_boundary() {
        let wordlist = setup_with_tempfile(&["xY7kLm"]);
        let mut settings = settings_for(&wordlist);

        settings.edit_distance_floor = 2;
        assert_eq!(check(&settings, "xY7kLm2q"), Verdict::Ok);

        settings.edit_distance_floor = 3;
        assert_eq!(check(&settings, "xY7kLm2q"), Verdict::TooCloseToDictionaryWord);
    }

    #[test]
    fn test_check_dictionary_unavailable() {
        let mut settings = settings_for(&setup_with_tempfile(&["password"]));
        settings.wordlist_path = "/nonexistent/path/wordlist.txt".into();
        assert_eq!(check(&settings, "Xk7mQ92pL"), Verdict::DictionaryUnavailable);
    }

    #[test]
    fn test_check_invalid_settings_first() {
        let wordlist = setup_with_tempfile(&["password"]);
        let mut settings = settings_for(&wordlist);
        settings.min_len = 11;
        assert_eq!(check(&settings, ""), Verdict::InvalidSettings);
        assert_eq!(check(&settings, "Xk7mQ92pL"), Verdict::InvalidSettings);
    }

    #[test]
    fn test_check_does_not_mutate_settings() {
        let wordlist = setup_with_tempfile(&["password"]);
        let settings = settings_for(&wordlist);
        let before = format!("{:?}", settings);
        let _ = check(&settings, "Xk7mQ92pL");
        assert_eq!(format!("{:?}", settings), before);
    }
}
