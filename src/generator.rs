//! Password generator - rejection sampling against the checker.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};
use secrecy::SecretString;
use thiserror::Error;

use crate::checker::run_sections;
use crate::settings::{PolicySettings, SettingsError};
use crate::verdict::Verdict;

/// Candidates drawn before giving up on a policy.
pub const MAX_GENERATION_ATTEMPTS: usize = 10;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Invalid policy settings: {0}")]
    InvalidSettings(#[from] SettingsError),
    #[error("Wordlist could not be read")]
    DictionaryUnavailable,
    #[error("No compliant password after {attempts} attempts")]
    Exhausted { attempts: usize },
}

/// Generates a password that passes [`check_password`](crate::check_password)
/// with the same settings, drawing from the operating system's CSPRNG.
///
/// # Errors
///
/// Returns error if:
/// - The settings are invalid
/// - The wordlist cannot be read
/// - [`MAX_GENERATION_ATTEMPTS`] candidates were all rejected
pub fn generate_password(settings: &PolicySettings) -> Result<SecretString, GenerationError> {
    generate_password_with_rng(settings, &mut OsRng)
}

/// Same as [`generate_password`] with a caller-supplied CSPRNG.
pub fn generate_password_with_rng<R>(
    settings: &PolicySettings,
    rng: &mut R,
) -> Result<SecretString, GenerationError>
where
    R: Rng + CryptoRng,
{
    generate_with(settings, rng, |candidate| {
        run_sections(settings, candidate, &|| false)
    })
}

fn generate_with<R, F>(
    settings: &PolicySettings,
    rng: &mut R,
    mut check: F,
) -> Result<SecretString, GenerationError>
where
    R: Rng + CryptoRng,
    F: FnMut(&SecretString) -> Verdict,
{
    settings.validate()?;

    let mut attempts = 0;
    while attempts < MAX_GENERATION_ATTEMPTS {
        attempts += 1;
        let candidate = sample(settings, rng);
        match check(&candidate) {
            Verdict::Ok => return Ok(candidate),
            // Not a property of the candidate, retrying cannot help
            Verdict::DictionaryUnavailable => return Err(GenerationError::DictionaryUnavailable),
            _verdict => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Generation attempt {} rejected: {:?}", attempts, _verdict);
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::warn!("Password generation gave up after {} attempts", attempts);

    Err(GenerationError::Exhausted { attempts })
}

/// Draws `gen_len` characters uniformly from the charset.
fn sample<R: Rng + CryptoRng>(settings: &PolicySettings, rng: &mut R) -> SecretString {
    let charset = &settings.charset;
    let password: String = (0..settings.gen_len)
        .map(|_| charset[rng.gen_range(0..charset.len())])
        .collect();
    SecretString::new(password.into())
}
