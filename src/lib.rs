//! Password strength evaluation and random password generation
//!
//! This library scores candidate passwords with a fixed heuristic and
//! generates random passwords from a cryptographically secure source. UI
//! front ends bind to it through the adapters in [`adapters`].
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DICTIONARY_PATH`: Extra weak-token file merged into the built-in
//!   dictionary by [`WeakTokenDictionary::from_env`]
//!
//! # Example
//!
//! ```rust
//! use pwd_toolkit::{evaluate_password_strength, generate_password, GenerationRequest};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let evaluation = evaluate_password_strength(&password, None);
//!
//! #[cfg(not(feature = "async"))]
//! let evaluation = evaluate_password_strength(&password);
//!
//! println!("Score: {:?}", evaluation.score);
//! println!("Strength: {}", evaluation.strength());
//!
//! let generated = generate_password(&GenerationRequest::default()).expect("valid request");
//! assert_eq!(generated.expose_secret().chars().count(), 16);
//! ```

// Internal modules
mod app;
mod dictionary;
mod evaluator;
mod generator;
mod sections;
mod types;

pub mod adapters;

// Public API
pub use app::{GeneratorOptions, PasswordToolkit};
pub use dictionary::{
    DICTIONARY_PATH_VAR, DictionaryError, WeakTokenDictionary, get_dictionary_path,
};
pub use evaluator::{Evaluator, evaluate_password_strength};
pub use generator::{
    AMBIGUOUS, DIGITS, GenerationRequest, GeneratorError, LOWERCASE, SYMBOLS, UPPERCASE,
    effective_charset, generate_password, generate_password_with_rng,
};
pub use types::{
    CriteriaReport, Criterion, PasswordEvaluation, PasswordScore, PasswordStrength, SPECIAL_CHARS,
};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_password_strength_tx};
