//! Policy settings
//!
//! Holds the immutable configuration every check and generation reads, and
//! loads it from a line-oriented `key = value` file.
//!
//! # Environment Variable
//!
//! `PWD_POLICY_PATH` selects the file read by [`load_settings`]
//! (default: `./pwd-policy.conf`).

use regex::Regex;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::verdict::Verdict;

pub const DEFAULT_MIN_LEN: usize = 8;
pub const DEFAULT_GEN_LEN: usize = 10;
pub const DEFAULT_CHARSET: &str =
    "azertyuiopqsdfghjklmwxcvbnAZERTYUPQSDFGHJKLMWXCVBN0123456789/*-+:?!#@";
pub const DEFAULT_WORDLIST: &str = "./wordlist.txt";
pub const DEFAULT_EDIT_DISTANCE_FLOOR: usize = 4;
/// Capital letter, lowercase letters, then digits: `Password1`.
pub const DEFAULT_TYPO_PATTERN: &str = "^[A-Z][a-z]*[0-9]*[0-9]$";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings file not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read settings file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("Line {line}: unknown key `{key}`")]
    UnknownKey { line: usize, key: String },
    #[error("Invalid value for `{key}`: `{value}`")]
    InvalidValue { key: String, value: String },
    #[error("Invalid typo pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("min_len ({min_len}) is greater than gen_len ({gen_len})")]
    LengthOrder { min_len: usize, gen_len: usize },
    #[error("Charset is empty")]
    EmptyCharset,
    #[error("Wordlist path is empty")]
    EmptyWordlistPath,
}

/// Immutable policy configuration.
///
/// Build it once with [`PolicySettings::new`] or [`load_settings`], then share
/// it by reference (or behind an `Arc`) with every check and generation.
#[derive(Debug, Clone)]
pub struct PolicySettings {
    pub min_len: usize,
    pub gen_len: usize,
    pub charset: Vec<char>,
    pub wordlist_path: PathBuf,
    pub edit_distance_floor: usize,
    pub typo_pattern: Regex,
}

impl PolicySettings {
    /// Compiles `typo_pattern` and validates the result.
    pub fn new(
        min_len: usize,
        gen_len: usize,
        charset: &str,
        wordlist_path: impl Into<PathBuf>,
        edit_distance_floor: usize,
        typo_pattern: &str,
    ) -> Result<Self, SettingsError> {
        let settings = PolicySettings {
            min_len,
            gen_len,
            charset: charset.chars().collect(),
            wordlist_path: wordlist_path.into(),
            edit_distance_floor,
            typo_pattern: Regex::new(typo_pattern)?,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Checks the invariants every consumer relies on.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.min_len > self.gen_len {
            return Err(SettingsError::LengthOrder {
                min_len: self.min_len,
                gen_len: self.gen_len,
            });
        }
        if self.charset.is_empty() {
            return Err(SettingsError::EmptyCharset);
        }
        if self.wordlist_path.as_os_str().is_empty() {
            return Err(SettingsError::EmptyWordlistPath);
        }
        Ok(())
    }
}

impl TryFrom<SettingsFile> for PolicySettings {
    type Error = SettingsError;

    fn try_from(file: SettingsFile) -> Result<Self, Self::Error> {
        PolicySettings::new(
            file.min_len,
            file.gen_len,
            &file.charset,
            file.wordlist,
            file.levenshtein_distance,
            &file.forbidden_typo,
        )
    }
}

/// Returns [`Verdict::Ok`] or [`Verdict::InvalidSettings`].
pub fn validate_settings(settings: &PolicySettings) -> Verdict {
    match settings.validate() {
        Ok(()) => Verdict::Ok,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Policy settings rejected: {}", _e);
            Verdict::InvalidSettings
        }
    }
}

/// Uncompiled settings as written in a settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsFile {
    pub min_len: usize,
    pub gen_len: usize,
    pub charset: String,
    pub wordlist: PathBuf,
    pub levenshtein_distance: usize,
    pub forbidden_typo: String,
}

impl Default for SettingsFile {
    fn default() -> Self {
        SettingsFile {
            min_len: DEFAULT_MIN_LEN,
            gen_len: DEFAULT_GEN_LEN,
            charset: DEFAULT_CHARSET.to_string(),
            wordlist: PathBuf::from(DEFAULT_WORDLIST),
            levenshtein_distance: DEFAULT_EDIT_DISTANCE_FLOOR,
            forbidden_typo: DEFAULT_TYPO_PATTERN.to_string(),
        }
    }
}

impl FromStr for SettingsFile {
    type Err = SettingsError;

    /// Parses `key = value` lines; keys that never appear keep their default.
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let mut file = SettingsFile::default();

        for (line_no, line) in setting_lines(content) {
            let (key, value) = line.split_once('=').ok_or_else(|| SettingsError::Parse {
                line: line_no,
                message: "expected `key = value`".to_string(),
            })?;
            let key = key.trim();
            let value = value.trim();

            match key {
                "min_len" => file.min_len = parse_number(key, value)?,
                "gen_len" => file.gen_len = parse_number(key, value)?,
                "levenshtein_distance" => file.levenshtein_distance = parse_number(key, value)?,
                "charset" => file.charset = value.to_string(),
                "wordlist" => file.wordlist = PathBuf::from(value),
                "forbiden_typo" | "forbidden_typo" => file.forbidden_typo = value.to_string(),
                _ => {
                    return Err(SettingsError::UnknownKey {
                        line: line_no,
                        key: key.to_string(),
                    });
                }
            }
        }

        Ok(file)
    }
}

/// Yields `(line number, trimmed line)` for every line that is neither blank
/// nor a `#` comment.
fn setting_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(idx, raw)| (idx + 1, raw.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn parse_number(key: &str, value: &str) -> Result<usize, SettingsError> {
    value.parse().map_err(|_| SettingsError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Returns the settings file path.
///
/// Priority:
/// 1. Environment variable `PWD_POLICY_PATH`
/// 2. Default path `./pwd-policy.conf`
pub fn get_settings_path() -> PathBuf {
    std::env::var("PWD_POLICY_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./pwd-policy.conf"))
}

/// Loads and validates settings from [`get_settings_path`].
pub fn load_settings() -> Result<PolicySettings, SettingsError> {
    load_settings_from_path(get_settings_path())
}

/// Loads and validates settings from a specific file.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist or cannot be read
/// - A line is malformed or names an unknown key
/// - The resulting settings break an invariant or the pattern does not compile
pub fn load_settings_from_path<P: AsRef<Path>>(path: P) -> Result<PolicySettings, SettingsError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Settings loading FAILED: FileNotFound {:?}", path);
        return Err(SettingsError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let file: SettingsFile = content.parse()?;
    let settings = PolicySettings::try_from(file)?;

    #[cfg(feature = "tracing")]
    tracing::info!(
        "Policy settings loaded from {:?}: {} keys set",
        path,
        setting_lines(&content).count()
    );

    Ok(settings)
}
