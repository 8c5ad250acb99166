//! Application context shared by the UI adapters.

use std::sync::Arc;

use secrecy::SecretString;

use crate::adapters::{Clipboard, GeneratorPanel, GeneratorView, PasswordChecker, StrengthView};
use crate::dictionary::{DictionaryError, WeakTokenDictionary};
use crate::evaluator::Evaluator;
use crate::generator::{GenerationRequest, GeneratorError, generate_password};
use crate::types::PasswordEvaluation;

/// Partial generator options; unset fields keep the toolkit defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub length: Option<usize>,
    pub uppercase: Option<bool>,
    pub lowercase: Option<bool>,
    pub digits: Option<bool>,
    pub symbols: Option<bool>,
    pub exclude_ambiguous: Option<bool>,
}

impl GeneratorOptions {
    pub fn apply(&self, base: GenerationRequest) -> GenerationRequest {
        GenerationRequest {
            length: self.length.unwrap_or(base.length),
            uppercase: self.uppercase.unwrap_or(base.uppercase),
            lowercase: self.lowercase.unwrap_or(base.lowercase),
            digits: self.digits.unwrap_or(base.digits),
            symbols: self.symbols.unwrap_or(base.symbols),
            exclude_ambiguous: self.exclude_ambiguous.unwrap_or(base.exclude_ambiguous),
        }
    }
}

/// Explicitly constructed context holding the evaluator and generator
/// defaults. Pass it (or the adapters it builds) to whatever needs it.
#[derive(Debug, Clone, Default)]
pub struct PasswordToolkit {
    evaluator: Arc<Evaluator>,
    defaults: GenerationRequest,
}

impl PasswordToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dictionary(dictionary: WeakTokenDictionary) -> Self {
        Self {
            evaluator: Arc::new(Evaluator::with_dictionary(dictionary)),
            defaults: GenerationRequest::default(),
        }
    }

    /// Builds a toolkit whose dictionary honours `PWD_DICTIONARY_PATH`.
    pub fn from_env() -> Result<Self, DictionaryError> {
        let dictionary = WeakTokenDictionary::from_env()?;

        #[cfg(feature = "tracing")]
        tracing::info!("Password toolkit initialized: {} dictionary tokens", dictionary.len());

        Ok(Self::with_dictionary(dictionary))
    }

    pub fn with_defaults(mut self, defaults: GenerationRequest) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn defaults(&self) -> &GenerationRequest {
        &self.defaults
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn check_password(&self, password: &SecretString) -> PasswordEvaluation {
        #[cfg(feature = "async")]
        return self.evaluator.evaluate(password, None);

        #[cfg(not(feature = "async"))]
        return self.evaluator.evaluate(password);
    }

    /// Debounced evaluation sending its result on `tx`; see
    /// [`evaluate_password_strength_tx`](crate::evaluate_password_strength_tx).
    #[cfg(feature = "async")]
    pub async fn check_password_tx(
        &self,
        password: &SecretString,
        token: tokio_util::sync::CancellationToken,
        tx: tokio::sync::mpsc::Sender<PasswordEvaluation>,
    ) {
        crate::evaluator::evaluate_with_tx(&self.evaluator, password, token, tx).await
    }

    pub fn generate_password(
        &self,
        options: &GeneratorOptions,
    ) -> Result<SecretString, GeneratorError> {
        generate_password(&options.apply(self.defaults))
    }

    pub fn checker<V: StrengthView>(&self, view: V) -> PasswordChecker<V> {
        PasswordChecker::new(Arc::clone(&self.evaluator), view)
    }

    pub fn generator_panel<V: GeneratorView, C: Clipboard>(
        &self,
        view: V,
        clipboard: C,
    ) -> GeneratorPanel<V, C> {
        GeneratorPanel::new(self.defaults, view, clipboard)
    }
}
