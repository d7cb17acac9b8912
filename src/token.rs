//! Token types produced by the [`Lexer`](crate::Lexer).

use std::fmt;

/// The kind of a lexical unit.
///
/// There is no whitespace kind: whitespace is consumed inside the lexer and
/// never reaches the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A decimal number with a fractional part, e.g. `3.14`.
    Float,
    /// An optionally negative run of digits, e.g. `-42`.
    Integer,
    /// A double-quoted string, escapes left undecoded.
    String,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// The `null` literal.
    Null,
    /// Synthetic token marking the end of the source.
    EndOfInput,
}

impl TokenKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Float => "FLOAT",
            TokenKind::Integer => "INTEGER",
            TokenKind::String => "STRING",
            TokenKind::LeftBrace => "LCURLY",
            TokenKind::RightBrace => "RCURLY",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Null => "NULL",
            TokenKind::EndOfInput => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single token: its kind, the exact text it matched, and where it starts.
///
/// The lexeme borrows from the source. For strings it still includes the
/// surrounding quotes; stripping them is the parser's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
    /// Byte offset of the first character of the lexeme.
    pub offset: usize,
}

impl<'a> Token<'a> {
    #[must_use]
    pub const fn new(kind: TokenKind, lexeme: &'a str, offset: usize) -> Self {
        Token {
            kind,
            lexeme,
            offset,
        }
    }

    /// Returns `true` for the synthetic end-of-input token.
    #[inline]
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_eof() {
            write!(f, "Token({})", self.kind)
        } else {
            write!(f, "Token({}, {:?})", self.kind, self.lexeme)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::String, "\"k1\"", 1);
        assert_eq!(token.to_string(), r#"Token(STRING, "\"k1\"")"#);

        let token = Token::new(TokenKind::Integer, "2", 0);
        assert_eq!(token.to_string(), r#"Token(INTEGER, "2")"#);

        let eof = Token::new(TokenKind::EndOfInput, "", 10);
        assert!(eof.is_eof());
        assert_eq!(eof.to_string(), "Token(EOF)");
    }
}
