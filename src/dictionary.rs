//! Weak-token dictionary
//!
//! Holds the common tokens that trigger the dictionary penalty. A built-in
//! list is always present; extra tokens can be merged from a file.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an extra token file.
pub const DICTIONARY_PATH_VAR: &str = "PWD_DICTIONARY_PATH";

const BUILTIN_TOKENS: &[&str] = &[
    "password", "123456", "qwerty", "admin", "login", "welcome", "letmein", "monkey", "dragon",
    "master", "hello", "freedom", "shadow", "michael", "jordan", "superman", "batman",
];

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Dictionary file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read dictionary file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Dictionary file is empty")]
    EmptyFile,
}

/// Lowercased tokens matched as case-insensitive substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeakTokenDictionary {
    tokens: BTreeSet<String>,
}

impl Default for WeakTokenDictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl WeakTokenDictionary {
    /// The fixed list of common weak tokens.
    pub fn builtin() -> Self {
        Self::with_tokens(BUILTIN_TOKENS.iter().copied())
    }

    /// Builds a dictionary from arbitrary tokens. Blank tokens are dropped.
    pub fn with_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = tokens
            .into_iter()
            .filter_map(|t| normalize(t.as_ref()))
            .collect();
        Self { tokens }
    }

    /// Returns the built-in dictionary, extended with the file named by
    /// `PWD_DICTIONARY_PATH` when that variable is set.
    ///
    /// # Errors
    ///
    /// Same as [`extend_from_path`](Self::extend_from_path).
    pub fn from_env() -> Result<Self, DictionaryError> {
        let mut dictionary = Self::builtin();
        if let Some(path) = get_dictionary_path() {
            dictionary.extend_from_path(path)?;
        }
        Ok(dictionary)
    }

    /// Merges tokens from a file, one per line.
    ///
    /// Lines are trimmed and lowercased; blank lines and `#` comments are
    /// skipped. Returns the number of tokens read from the file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File holds no tokens
    pub fn extend_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, DictionaryError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Dictionary load FAILED: FileNotFound {:?}", path);
            return Err(DictionaryError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        let loaded: Vec<String> = content
            .lines()
            .filter(|l| !l.trim_start().starts_with('#'))
            .filter_map(normalize)
            .collect();

        if loaded.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Dictionary load FAILED: Empty file {:?}", path);
            return Err(DictionaryError::EmptyFile);
        }

        let count = loaded.len();
        self.tokens.extend(loaded);

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Dictionary extended: {} tokens from {:?} ({} total)",
            count,
            path,
            self.tokens.len()
        );

        Ok(count)
    }

    /// Returns the first token contained in `password`, ignoring case.
    pub fn find_in(&self, password: &str) -> Option<&str> {
        let lowered = password.to_lowercase();
        self.tokens
            .iter()
            .find(|t| lowered.contains(t.as_str()))
            .map(String::as_str)
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.tokens.contains(&token.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Returns the extra dictionary path from `PWD_DICTIONARY_PATH`, if set.
pub fn get_dictionary_path() -> Option<PathBuf> {
    std::env::var_os(DICTIONARY_PATH_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn normalize(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_lowercase())
    }
}
