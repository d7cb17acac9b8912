//! Pattern-based lexer.
//!
//! The lexer keeps nothing but a byte cursor into the source. Each call to
//! [`Lexer::next_token`] tries the token patterns in a fixed priority order,
//! anchored at the cursor, and the first one that matches wins. `Float` is
//! tried before `Integer` because every float lexeme starts with an integer
//! lexeme; the reverse order would split `3.14` into `3` and a stray `.`.
//!
//! Whitespace is one of the patterns, but matching runs are skipped inside the
//! lexer so callers never see them.
//!
//! ## Examples
//!
//! ```rust
//! use flatjson::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new(r#"{ "pi": 3.14 }"#);
//! let kinds: Vec<TokenKind> = std::iter::from_fn(|| {
//!     let token = lexer.next_token().unwrap();
//!     (!token.is_eof()).then_some(token.kind)
//! })
//! .collect();
//!
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::LeftBrace,
//!         TokenKind::String,
//!         TokenKind::Colon,
//!         TokenKind::Float,
//!         TokenKind::RightBrace,
//!     ]
//! );
//! ```

use crate::token::{Token, TokenKind};
use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Token patterns in priority order. `None` marks whitespace, which is skipped.
const TOKEN_PATTERNS: &[(Option<TokenKind>, &str)] = &[
    (Some(TokenKind::Float), r"-?[0-9]+\.[0-9]+"),
    (Some(TokenKind::Integer), r"-?[0-9]+"),
    (Some(TokenKind::String), r#""(?:[^"\\]|\\.)*""#),
    (Some(TokenKind::LeftBrace), r"\{"),
    (Some(TokenKind::RightBrace), r"\}"),
    (Some(TokenKind::Comma), r","),
    (Some(TokenKind::Colon), r":"),
    (Some(TokenKind::Null), r"null"),
    (None, r"\s+"),
];

/// Compiled once and shared read-only by every lexer.
static PATTERNS: Lazy<Vec<(Option<TokenKind>, Regex)>> = Lazy::new(|| {
    TOKEN_PATTERNS
        .iter()
        .map(|(kind, pattern)| (*kind, Regex::new(&format!("^(?:{pattern})")).unwrap()))
        .collect()
});

/// Returns the first pattern matching at the start of `rest` and the match length.
fn match_pattern(rest: &str) -> Option<(Option<TokenKind>, usize)> {
    PATTERNS
        .iter()
        .find_map(|(kind, regex)| regex.find(rest).map(|m| (*kind, m.end())))
}

/// Turns source text into [`Token`]s, one call at a time.
///
/// The lexer also implements [`Iterator`], yielding every token up to and
/// including [`TokenKind::EndOfInput`], or stopping at the first error.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    cursor: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            cursor: 0,
            finished: false,
        }
    }

    /// Creates a lexer that resumes scanning at byte `offset`.
    ///
    /// Offsets past the end are clamped to the end; offsets inside a multi-byte
    /// character are moved back to the start of that character.
    #[must_use]
    pub fn with_offset(source: &'a str, offset: usize) -> Self {
        let mut cursor = offset.min(source.len());
        while !source.is_char_boundary(cursor) {
            cursor -= 1;
        }
        Lexer {
            source,
            cursor,
            finished: false,
        }
    }

    /// The current byte offset of the scan cursor.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Scans the next token.
    ///
    /// At the end of the source this returns a [`TokenKind::EndOfInput`]
    /// token with an empty lexeme and leaves the cursor where it is, so it can
    /// be called again safely.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lex`] when no pattern matches at the cursor. The cursor
    /// is not moved.
    pub fn next_token(&mut self) -> Result<Token<'a>> {
        loop {
            let rest = &self.source[self.cursor..];
            if rest.is_empty() {
                return Ok(Token::new(TokenKind::EndOfInput, "", self.cursor));
            }

            let Some((kind, len)) = match_pattern(rest) else {
                return Err(Error::Lex {
                    offset: self.cursor,
                    character: rest.chars().next().unwrap_or_default(),
                });
            };

            let start = self.cursor;
            self.cursor += len;

            if let Some(kind) = kind {
                let token = Token::new(kind, &rest[..len], start);
                trace!(kind = %token.kind, offset = token.offset, lexeme = token.lexeme, "token");
                return Ok(token);
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.next_token();
        if !matches!(item, Ok(ref token) if !token.is_eof()) {
            self.finished = true;
        }
        Some(item)
    }
}
