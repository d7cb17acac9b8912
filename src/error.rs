//! Error types for lexing and parsing.
//!
//! Every failure is terminal: the parser never returns a partial object and
//! never skips ahead to recover. Each variant carries the byte offset into the
//! source where it was detected, so callers can point at the offending text.
//!
//! ## Error Categories
//!
//! - **Lex**: no token pattern matches at the current position
//! - **Syntax**: a token is valid but appears where the grammar forbids it
//! - **Data**: a token is well placed but its content cannot be represented
//!   (unsupported value kinds, out-of-range integers, typed extraction)
//! - **Limit**: a configured [`ParseOptions`](crate::ParseOptions) limit was hit
//!
//! ## Examples
//!
//! ```rust
//! use flatjson::{parse, Error, TokenKind};
//!
//! let err = parse(r#"{"a":null}"#).unwrap_err();
//! assert!(matches!(err, Error::UnsupportedValue { found: TokenKind::Null, position: 5 }));
//! assert_eq!(err.offset(), Some(5));
//! ```

use crate::token::TokenKind;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced while turning text into values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No token pattern matches at `offset`.
    #[error("Invalid character {character:?} at offset {offset}")]
    Lex { offset: usize, character: char },

    /// The current token does not fit the grammar position.
    #[error("Parse error at offset {position}: expected {expected}, found {found}")]
    Parse {
        expected: &'static str,
        found: TokenKind,
        position: usize,
    },

    /// A lexically valid token that has no value representation.
    #[error("Unsupported value type {found} at offset {position}")]
    UnsupportedValue { found: TokenKind, position: usize },

    /// An integer lexeme that does not fit in an `i64`.
    #[error("Invalid integer {lexeme:?} at offset {position}: out of range")]
    InvalidInteger { lexeme: String, position: usize },

    /// Tokens remain after the closing brace and trailing content is disallowed.
    #[error("Unexpected trailing {found} at offset {position}")]
    TrailingContent { found: TokenKind, position: usize },

    /// The input is larger than the configured limit.
    #[error("Input of {len} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge { len: usize, limit: usize },

    /// Custom error, raised during typed extraction.
    #[error("Error: {0}")]
    Custom(String),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Lex,
    Syntax,
    Data,
    Limit,
}

impl Error {
    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flatjson::Error;
    ///
    /// let err = Error::custom("missing field `id`");
    /// assert!(err.to_string().contains("missing field"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the byte offset into the source where the error was detected.
    ///
    /// Errors that are not tied to a position (size limits, custom errors)
    /// return `None`.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Lex { offset, .. } => Some(*offset),
            Error::Parse { position, .. }
            | Error::UnsupportedValue { position, .. }
            | Error::InvalidInteger { position, .. }
            | Error::TrailingContent { position, .. } => Some(*position),
            Error::InputTooLarge { .. } | Error::Custom(_) => None,
        }
    }

    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Error::Lex { .. } => Category::Lex,
            Error::Parse { .. } | Error::TrailingContent { .. } => Category::Syntax,
            Error::UnsupportedValue { .. } | Error::InvalidInteger { .. } | Error::Custom(_) => {
                Category::Data
            }
            Error::InputTooLarge { .. } => Category::Limit,
        }
    }

    /// Converts the error offset into a 1-based `(line, column)` pair within `source`.
    ///
    /// Columns count characters, not bytes. Returns `None` when the error has no
    /// offset or the offset lies outside `source`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flatjson::parse;
    ///
    /// let source = "{\n  \"a\": ?\n}";
    /// let err = parse(source).unwrap_err();
    /// assert_eq!(err.line_col(source), Some((2, 8)));
    /// ```
    #[must_use]
    pub fn line_col(&self, source: &str) -> Option<(usize, usize)> {
        let offset = self.offset()?;
        let before = source.get(..offset)?;
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        Some((line, column))
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
