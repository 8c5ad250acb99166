//! Generator panel adapter - option state, generate and copy actions.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::generator::{GenerationRequest, GeneratorError, generate_password};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("No password to copy")]
    NothingToCopy,
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Destination for copied passwords.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Displays generator state.
pub trait GeneratorView {
    fn show_password(&mut self, password: &SecretString);
    fn show_length(&mut self, length: usize);
    /// User-visible message asking to adjust the options.
    fn prompt(&mut self, message: &str);
    fn copied(&mut self, copied: bool);
}

/// Toggleable generator options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorOption {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
    ExcludeAmbiguous,
}

pub struct GeneratorPanel<V, C> {
    request: GenerationRequest,
    view: V,
    clipboard: C,
    current: Option<SecretString>,
}

impl<V: GeneratorView, C: Clipboard> GeneratorPanel<V, C> {
    pub fn new(request: GenerationRequest, view: V, clipboard: C) -> Self {
        Self {
            request,
            view,
            clipboard,
            current: None,
        }
    }

    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }

    pub fn password(&self) -> Option<&SecretString> {
        self.current.as_ref()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Length slider moved.
    pub fn on_length_change(&mut self, length: usize) {
        self.request.length = length;
        self.view.show_length(length);
    }

    pub fn set_option(&mut self, option: GeneratorOption, enabled: bool) {
        let flag = match option {
            GeneratorOption::Uppercase => &mut self.request.uppercase,
            GeneratorOption::Lowercase => &mut self.request.lowercase,
            GeneratorOption::Digits => &mut self.request.digits,
            GeneratorOption::Symbols => &mut self.request.symbols,
            GeneratorOption::ExcludeAmbiguous => &mut self.request.exclude_ambiguous,
        };
        *flag = enabled;
    }

    /// Generate button clicked.
    ///
    /// On failure the previous password stays on display and the user is
    /// prompted to adjust the options.
    pub fn on_generate(&mut self) -> Result<(), GeneratorError> {
        match generate_password(&self.request) {
            Ok(password) => {
                self.view.show_password(&password);
                self.view.copied(false);
                self.current = Some(password);
                Ok(())
            }
            Err(e) => {
                self.view.prompt(&e.to_string());
                Err(e)
            }
        }
    }

    /// Copy button clicked.
    pub fn on_copy(&mut self) -> Result<(), ClipboardError> {
        let Some(password) = self.current.as_ref() else {
            let err = ClipboardError::NothingToCopy;
            self.view.prompt(&err.to_string());
            return Err(err);
        };

        match self.clipboard.write_text(password.expose_secret()) {
            Ok(()) => {
                self.view.copied(true);
                Ok(())
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Copy to clipboard failed: {}", e);
                self.view.prompt(&e.to_string());
                Err(e)
            }
        }
    }
}
