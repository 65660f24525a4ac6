//! Error types for SGF parsing and serialization.
//!
//! Parsing can fail in two distinct ways, and callers frequently want to tell
//! them apart:
//!
//! - **Lexical errors**: characters that cannot appear outside a property value,
//!   such as a lowercase identifier, or a value whose closing `]` never arrives.
//! - **Parse errors**: a well-formed token sequence that does not follow the
//!   collection grammar, such as a missing `)` or a duplicated property.
//!
//! Both carry 1-based line and column information. The remaining variants are
//! raised by the serializer, the checked accessors of the data model, and the
//! file wrappers.
//!
//! ## Examples
//!
//! ```rust
//! use sgf_tree::from_str;
//!
//! let err = from_str("(;b[aa])").unwrap_err();
//! assert!(err.is_lexical());
//!
//! let err = from_str("(;B[aa]").unwrap_err();
//! assert!(err.is_parse());
//! assert!(err.to_string().contains("unterminated game tree"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while reading or writing SGF.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Illegal character sequence outside a property value
    #[error("Lexical error at line {line}, column {col}: {msg}")]
    Lexical { line: usize, col: usize, msg: String },

    /// Token sequence that violates the collection grammar
    #[error("Parse error at line {line}, column {col}: {msg} ({context})")]
    Parse {
        line: usize,
        col: usize,
        msg: String,
        context: String,
    },

    /// Property identifier that cannot be read back by the lexer
    #[error("Invalid property identifier: {0:?}")]
    InvalidIdentifier(String),

    /// Game tree without any node in its sequence
    #[error("Game tree must contain at least one node to be written")]
    EmptyGameTree,

    /// Main-path access past the last node
    #[error("Index {index} out of range for game tree with {len} node(s) on its main path")]
    IndexOutOfRange { index: usize, len: usize },

    /// Value conversion to an incompatible type
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a lexical error at the given position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgf_tree::Error;
    ///
    /// let err = Error::lexical(3, 7, "unexpected character 'x'");
    /// assert!(err.to_string().contains("line 3, column 7"));
    /// ```
    pub fn lexical(line: usize, col: usize, msg: &str) -> Self {
        Error::Lexical {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates a parse error at the given position.
    ///
    /// `context` describes the construct that was being parsed when the grammar
    /// was violated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgf_tree::Error;
    ///
    /// let err = Error::parse(1, 8, "duplicate property identifier in node", "property KM");
    /// assert!(err.is_parse());
    /// assert!(err.to_string().contains("property KM"));
    /// ```
    pub fn parse(line: usize, col: usize, msg: &str, context: &str) -> Self {
        Error::Parse {
            line,
            col,
            msg: msg.to_string(),
            context: context.to_string(),
        }
    }

    /// Creates an error for a property identifier that cannot be serialized.
    pub fn invalid_identifier(id: &str) -> Self {
        Error::InvalidIdentifier(id.to_string())
    }

    /// Creates an out-of-range error for main-path indexing.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    /// Creates a type mismatch error for value conversions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgf_tree::Error;
    ///
    /// let err = Error::type_mismatch("integer", "text \"aa\"");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for errors raised by the lexer.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self, Error::Lexical { .. })
    }

    /// Returns `true` for grammar violations raised by the parser.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }

    /// Returns the 1-based `(line, column)` of lexical and parse errors.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::Lexical { line, col, .. } | Error::Parse { line, col, .. } => {
                Some((*line, *col))
            }
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_only_for_positioned_errors() {
        assert_eq!(Error::lexical(2, 4, "x").position(), Some((2, 4)));
        assert_eq!(Error::parse(5, 1, "x", "y").position(), Some((5, 1)));
        assert_eq!(Error::EmptyGameTree.position(), None);
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.sgf");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("missing.sgf")));
    }
}
