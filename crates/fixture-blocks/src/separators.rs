//! Separator token configuration.
//!
//! A separator is a string that, alone on a line, opens and closes fixture
//! blocks. Callers may describe the set loosely (a string of single-character
//! tokens, or a list of tokens); [`SeparatorSpec::normalize`] turns any of
//! those into the one canonical [`Separators`] shape the decoder accepts.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Token used when no separators are configured.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Ordered, non-empty set of separator tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Separators {
    tokens: Vec<String>,
}

impl Separators {
    /// Build a separator set from explicit tokens.
    ///
    /// Duplicates are dropped, keeping the first occurrence. Fails when no
    /// tokens are given or when a token could never equal a whole line.
    pub fn new<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for token in tokens {
            let token = token.into();
            validate_token(&token)?;
            if !unique.contains(&token) {
                unique.push(token);
            }
        }

        if unique.is_empty() {
            return Err(Error::EmptySeparators);
        }

        Ok(Self { tokens: unique })
    }

    /// Build a separator set where every character of `chars` is one token.
    ///
    /// `"=."` yields the tokens `"="` and `"."`.
    pub fn from_chars(chars: &str) -> Result<Self> {
        Self::new(chars.chars().map(String::from))
    }

    /// Returns true if `line` is exactly one of the configured tokens.
    pub fn contains(&self, line: &str) -> bool {
        self.tokens.iter().any(|token| token == line)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            tokens: vec![DEFAULT_SEPARATOR.to_string()],
        }
    }
}

fn validate_token(token: &str) -> Result<()> {
    if token.is_empty() {
        return Err(Error::invalid_separator(token, "token is empty"));
    }
    if token.contains(['\n', '\r']) {
        return Err(Error::invalid_separator(
            token,
            "token spans more than one line",
        ));
    }
    Ok(())
}

/// Loosely-typed separator configuration as written by users.
///
/// Deserializes from either a string (`"=."`, one token per character) or a
/// list of strings (`["===", "."]`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SeparatorSpec {
    Chars(String),
    List(Vec<String>),
}

impl SeparatorSpec {
    /// Convert into a usable separator set.
    ///
    /// Unusable tokens are dropped one by one. Only when no token is left
    /// does the set fall back to the default `["."]`.
    pub fn normalize(self) -> Separators {
        let tokens: Vec<String> = match self {
            SeparatorSpec::Chars(chars) => chars.chars().map(String::from).collect(),
            SeparatorSpec::List(tokens) => tokens,
        };

        let usable = tokens.into_iter().filter(|token| match validate_token(token) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unusable separator");
                false
            }
        });

        Separators::new(usable).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "No usable separators configured, using default");
            Separators::default()
        })
    }
}

impl From<&str> for SeparatorSpec {
    fn from(chars: &str) -> Self {
        SeparatorSpec::Chars(chars.to_string())
    }
}

impl From<Vec<String>> for SeparatorSpec {
    fn from(tokens: Vec<String>) -> Self {
        SeparatorSpec::List(tokens)
    }
}

impl From<SeparatorSpec> for Separators {
    fn from(spec: SeparatorSpec) -> Self {
        spec.normalize()
    }
}
