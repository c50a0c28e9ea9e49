//! Error types for parsing, serialization and typed access.

use thiserror::Error;

/// Errors produced by json-lite.
///
/// Parse errors carry the byte offset at which the problem was detected.
/// [`Error::TypeMismatch`] is a caller error rather than a data error; use
/// [`Error::is_type_mismatch`] to tell the two apart.
#[derive(Error, Debug)]
pub enum Error {
    /// The lookahead byte does not start any value form.
    #[error("unexpected character {found:?} at offset {offset}")]
    UnexpectedCharacter { found: char, offset: usize },

    /// An object key is missing a quote or is preceded by a stray character.
    #[error("invalid object key at offset {offset}: {reason}")]
    InvalidKey { offset: usize, reason: &'static str },

    /// The input ended before a string's closing quote.
    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    /// A bare token is neither a keyword nor an accepted number.
    #[error("invalid token {token:?} at offset {offset}")]
    InvalidToken { token: String, offset: usize },

    /// The input ended where more was required (empty input, open container).
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    /// Non-whitespace input follows the top-level value.
    #[error("trailing characters after value at offset {offset}")]
    TrailingCharacters { offset: usize },

    /// Arrays and objects are nested deeper than the configured limit.
    #[error("nesting depth exceeds limit of {limit} at offset {offset}")]
    NestingTooDeep { limit: usize, offset: usize },

    /// A string or key is not valid UTF-8.
    #[error("string starting at offset {offset} is not valid UTF-8")]
    InvalidUtf8 { offset: usize },

    /// Reading from the source or writing to the sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A variant accessor was called on a value holding another variant.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A foreign payload cannot be represented by any `Value` variant.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

impl Error {
    /// True for errors caused by malformed input text.
    pub fn is_parse_error(&self) -> bool {
        self.offset().is_some()
    }

    /// True when a typed accessor was used on the wrong variant.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }

    /// Byte offset of a parse error.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::UnexpectedCharacter { offset, .. }
            | Error::InvalidKey { offset, .. }
            | Error::UnterminatedString { offset }
            | Error::InvalidToken { offset, .. }
            | Error::UnexpectedEof { offset }
            | Error::TrailingCharacters { offset }
            | Error::NestingTooDeep { offset, .. }
            | Error::InvalidUtf8 { offset } => Some(*offset),
            Error::Io(_) | Error::TypeMismatch { .. } | Error::InvalidValue(_) => None,
        }
    }
}

/// Convenience alias used throughout json-lite.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_report_offsets() {
        let err = Error::UnterminatedString { offset: 7 };
        assert!(err.is_parse_error());
        assert_eq!(err.offset(), Some(7));
        assert!(!err.is_type_mismatch());
    }

    #[test]
    fn type_mismatch_is_not_a_parse_error() {
        let err = Error::TypeMismatch {
            expected: "int",
            found: "string",
        };
        assert!(err.is_type_mismatch());
        assert!(!err.is_parse_error());
        assert_eq!(err.to_string(), "type mismatch: expected int, found string");
    }

    #[test]
    fn display_includes_token() {
        let err = Error::InvalidToken {
            token: "tru".to_string(),
            offset: 3,
        };
        assert_eq!(err.to_string(), "invalid token \"tru\" at offset 3");
    }
}
