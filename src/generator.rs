//! Random password generation from a cryptographically secure source.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};
use secrecy::SecretString;
use thiserror::Error;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";
/// Glyphs that are easy to confuse with one another.
pub const AMBIGUOUS: &str = "0O1lI";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Please select at least one character type")]
    EmptyCharset,
    #[error("Password length {length} is outside the supported range {min}..={max}")]
    InvalidLength {
        length: usize,
        min: usize,
        max: usize,
    },
}

/// Options for a single generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude_ambiguous: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            exclude_ambiguous: false,
        }
    }
}

impl GenerationRequest {
    pub const MIN_LENGTH: usize = 4;
    pub const MAX_LENGTH: usize = 128;

    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&self.length) {
            return Err(GeneratorError::InvalidLength {
                length: self.length,
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
            });
        }
        Ok(())
    }

    /// Estimated entropy in bits, `length * log2(charset size)`.
    pub fn entropy_bits(&self) -> f64 {
        let size = effective_charset(self).len();
        if size == 0 {
            return 0.0;
        }
        self.length as f64 * (size as f64).log2()
    }
}

/// Builds the pool of characters a request draws from.
///
/// Enabled classes are concatenated in the order upper, lower, digits,
/// symbols, then ambiguous glyphs are removed from the whole pool. The pool
/// is not de-duplicated.
pub fn effective_charset(request: &GenerationRequest) -> Vec<char> {
    let classes = [
        (request.uppercase, UPPERCASE),
        (request.lowercase, LOWERCASE),
        (request.digits, DIGITS),
        (request.symbols, SYMBOLS),
    ];

    classes
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .flat_map(|(_, alphabet)| alphabet.chars())
        .filter(|c| !(request.exclude_ambiguous && AMBIGUOUS.contains(*c)))
        .collect()
}

/// Generates a password using the operating system's random source.
///
/// # Errors
///
/// - [`GeneratorError::InvalidLength`] if the length is out of bounds
/// - [`GeneratorError::EmptyCharset`] if no characters are left to draw from
pub fn generate_password(request: &GenerationRequest) -> Result<SecretString, GeneratorError> {
    generate_password_with_rng(&mut OsRng, request)
}

/// Generates a password with a caller-supplied cryptographic RNG.
///
/// Each character is drawn independently and uniformly from the effective
/// charset. `Uniform` rejects out-of-zone samples, so there is no modulo
/// bias.
pub fn generate_password_with_rng<R>(
    rng: &mut R,
    request: &GenerationRequest,
) -> Result<SecretString, GeneratorError>
where
    R: Rng + CryptoRng,
{
    request.validate()?;

    let charset = effective_charset(request);
    if charset.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::warn!("Password generation rejected: empty character set");
        return Err(GeneratorError::EmptyCharset);
    }

    let index = Uniform::from(0..charset.len());
    let password: String = index
        .sample_iter(rng)
        .take(request.length)
        .map(|i| charset[i])
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Generated password: length={} charset={}",
        request.length,
        charset.len()
    );

    Ok(SecretString::new(password.into()))
}
