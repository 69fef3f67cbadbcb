//! Error types shared by comparators and tokenizers.

use thiserror::Error;

/// Broad classification of a [`CompareError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The arguments of a call violate its precondition.
    Input,
    /// A comparator or tokenizer was built with an invalid configuration.
    Config,
}

/// Errors that can occur while configuring or running a comparison
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    /// `elementwise` was given two lists of different sizes
    #[error("Lists should be of the same size: left has {left} elements, right has {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A delimiter tokenizer was given an empty delimiter
    #[error("Delimiter is empty")]
    EmptyDelimiter,

    /// No scorer is registered under this name
    #[error("Unknown algorithm: '{0}'")]
    UnknownAlgorithm(String),
}

impl CompareError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompareError::LengthMismatch { .. } => ErrorKind::Input,
            CompareError::EmptyDelimiter | CompareError::UnknownAlgorithm(_) => ErrorKind::Config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = CompareError::LengthMismatch { left: 2, right: 1 };
        assert_eq!(err.kind(), ErrorKind::Input);
        assert_eq!(CompareError::EmptyDelimiter.kind(), ErrorKind::Config);
        assert_eq!(
            CompareError::UnknownAlgorithm("soundex".into()).kind(),
            ErrorKind::Config
        );
    }

    #[test]
    fn test_error_messages() {
        let err = CompareError::LengthMismatch { left: 2, right: 1 };
        assert!(err.to_string().contains("same size"));
        assert!(CompareError::UnknownAlgorithm("soundex".into())
            .to_string()
            .contains("soundex"));
    }
}
