//! Dictionary section - rejects passwords too close to a wordlist entry.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::dictionary::{DictionaryError, min_distance_from_path_until};
use crate::settings::PolicySettings;
use crate::verdict::Verdict;

/// Scans `settings.wordlist_path` and fails when the closest entry is
/// strictly below `settings.edit_distance_floor`.
///
/// An unreadable wordlist fails with [`Verdict::DictionaryUnavailable`]. A
/// readable wordlist without entries passes.
///
/// # Returns
/// - `Some(Verdict::TooCloseToDictionaryWord)` if an entry is too close
/// - `Some(Verdict::DictionaryUnavailable)` if the wordlist cannot be read
/// - `Some(Verdict::Cancelled)` if `should_stop` fired during the scan
/// - `None` otherwise
pub fn dictionary_section(
    password: &SecretString,
    settings: &PolicySettings,
    should_stop: &dyn Fn() -> bool,
) -> SectionResult {
    let scan = min_distance_from_path_until(
        password.expose_secret(),
        &settings.wordlist_path,
        should_stop,
    );
    match scan {
        Ok(Some(d)) if d < settings.edit_distance_floor => {
            Some(Verdict::TooCloseToDictionaryWord)
        }
        Ok(_) => None,
        Err(DictionaryError::Cancelled) => Some(Verdict::Cancelled),
        Err(_) => Some(Verdict::DictionaryUnavailable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_settings;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    fn setup_with_tempfile(words: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for word in words {
            writeln!(temp_file, "{}", word).expect("Failed to write");
        }
        temp_file
    }

    fn check(pwd: &str, settings: &PolicySettings) -> SectionResult {
        dictionary_section(&SecretString::new(pwd.to_string().into()), settings, &|| false)
    }

    #[test]
    fn test_dictionary_section_too_close() {
        let temp_file = setup_with_tempfile(&["password", "qwerty"]);
        let settings = test_settings(temp_file.path());
        assert_eq!(check("pAssword1", &settings), Some(Verdict::TooCloseToDictionaryWord));
    }

    #[test]
    fn test_dictionary_section_distance_at_floor_passes() {
        let temp_file = setup_with_tempfile(&["xY7kLm"]);
        let mut settings = test_settings(temp_file.path());

        settings.edit_distance_floor = 2;
        assert_eq!(check("xY7kLm2q", &settings), None);

        settings.edit_distance_floor = 3;
        assert_eq!(check("xY7kLm2q", &settings), Some(Verdict::TooCloseToDictionaryWord));
    }

    #[test]
    fn test_dictionary_section_far_password() {
        let temp_file = setup_with_tempfile(&["password", "123456"]);
        let settings = test_settings(temp_file.path());
        assert_eq!(check("Xk7mQ92pL", &settings), None);
    }

    #[test]
    fn test_dictionary_section_missing_wordlist() {
        let settings = test_settings(Path::new("/nonexistent/path/wordlist.txt"));
        assert_eq!(check("Xk7mQ92pL", &settings), Some(Verdict::DictionaryUnavailable));
    }

    #[test]
    fn test_dictionary_section_empty_wordlist_passes() {
        let temp_file = setup_with_tempfile(&[]);
        let settings = test_settings(temp_file.path());
        assert_eq!(check("Xk7mQ92pL", &settings), None);
    }

    #[test]
    fn test_dictionary_section_stop_requested() {
        let temp_file = setup_with_tempfile(&["password"]);
        let settings = test_settings(temp_file.path());
        let pwd = SecretString::new("Xk7mQ92pL".to_string().into());
        assert_eq!(dictionary_section(&pwd, &settings, &|| true), Some(Verdict::Cancelled));
    }
}
