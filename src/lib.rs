//! Password policy engine
//!
//! Decides whether a candidate password meets configurable strength rules
//! and generates random passwords that meet the same rules.
//!
//! A check runs, in order: settings validity, empty, minimum length,
//! character classes, common typo shape and edit distance to a wordlist.
//! The first failing rule decides the [`Verdict`].
//!
//! # Features
//!
//! - `async` (default): Enables cancellation and channel-based checking
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_POLICY_PATH`: Custom path to the settings file
//!   (default: `./pwd-policy.conf`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_policy::{check_password, generate_password, load_settings};
//! use secrecy::SecretString;
//!
//! // Load settings once at startup
//! let settings = load_settings().expect("Failed to load policy settings");
//!
//! let password = SecretString::new("Xk7mQ92pL".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let verdict = check_password(&settings, &password, None);
//!
//! #[cfg(not(feature = "async"))]
//! let verdict = check_password(&settings, &password);
//!
//! println!("Verdict: {}", verdict);
//!
//! let generated = generate_password(&settings).expect("Policy too strict");
//! ```

mod checker;
mod dictionary;
mod distance;
mod generator;
mod sections;
mod settings;
mod verdict;

// Public API
pub use checker::check_password;
pub use dictionary::{DictionaryError, min_distance, min_distance_from_path, min_distance_until};
pub use distance::distance;
pub use generator::{
    GenerationError, MAX_GENERATION_ATTEMPTS, generate_password, generate_password_with_rng,
};
pub use sections::{has_required_classes, matches_common_typo};
pub use settings::{
    DEFAULT_CHARSET, DEFAULT_EDIT_DISTANCE_FLOOR, DEFAULT_GEN_LEN, DEFAULT_MIN_LEN,
    DEFAULT_TYPO_PATTERN, DEFAULT_WORDLIST, PolicySettings, SettingsError, SettingsFile,
    get_settings_path, load_settings, load_settings_from_path, validate_settings,
};
pub use verdict::Verdict;

#[cfg(feature = "async")]
pub use checker::check_password_tx;
