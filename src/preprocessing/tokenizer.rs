//! Tokenizers that turn a string into a [`Multiset`] of tokens.

use super::multiset::Multiset;
use crate::error::CompareError;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::warn;

/// A non-empty delimiter string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Delimiter(String);

impl Delimiter {
    /// Fails with [`CompareError::EmptyDelimiter`] when `delim` is empty.
    pub fn new(delim: impl Into<String>) -> Result<Self, CompareError> {
        let delim = delim.into();
        if delim.is_empty() {
            warn!("rejecting empty tokenizer delimiter");
            return Err(CompareError::EmptyDelimiter);
        }
        Ok(Self(delim))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Delimiter {
    type Error = CompareError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Delimiter> for String {
    fn from(delim: Delimiter) -> Self {
        delim.0
    }
}

/// How a string is split into tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tokenizer {
    /// Split on single spaces, dropping empty spans
    #[default]
    Whitespace,
    /// Split on a delimiter, dropping empty spans
    Delim(Delimiter),
    /// Every run of `n` consecutive characters
    #[serde(rename = "ngram")]
    NGram(usize),
}

impl Tokenizer {
    #[must_use]
    pub fn whitespace() -> Self {
        Tokenizer::Whitespace
    }

    /// Delimiter tokenizer; fails with [`CompareError::EmptyDelimiter`] for `""`.
    pub fn delim(delim: impl Into<String>) -> Result<Self, CompareError> {
        Delimiter::new(delim).map(Tokenizer::Delim)
    }

    /// Character n-gram tokenizer. `n == 0` always yields an empty bag.
    #[must_use]
    pub fn ngram(n: usize) -> Self {
        Tokenizer::NGram(n)
    }

    /// Split `sentence` into a bag of tokens.
    #[must_use]
    pub fn tokenize(&self, sentence: &str) -> Multiset {
        match self {
            Tokenizer::Whitespace => split_on(sentence, " "),
            Tokenizer::Delim(delim) => split_on(sentence, delim.as_str()),
            Tokenizer::NGram(n) => ngrams(sentence, *n),
        }
    }

    /// Tokenize each sentence in order.
    #[must_use]
    pub fn batch_tokenize<S: AsRef<str>>(&self, sentences: &[S]) -> Vec<Multiset> {
        sentences.iter().map(|s| self.tokenize(s.as_ref())).collect()
    }
}

fn split_on(sentence: &str, delim: &str) -> Multiset {
    sentence.split(delim).filter(|span| !span.is_empty()).collect()
}

fn ngrams(sentence: &str, n: usize) -> Multiset {
    let mut result = Multiset::new();
    if n == 0 {
        return result;
    }

    let chars: SmallVec<[char; 64]> = sentence.chars().collect();
    if n > chars.len() {
        return result;
    }

    for window in chars.windows(n) {
        result.insert(window.iter().collect::<String>());
    }
    result
}
