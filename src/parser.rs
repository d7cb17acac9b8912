//! Recursive-descent parser.
//!
//! The parser pulls tokens from its [`Lexer`] one at a time and never holds
//! more than one unconsumed token. Grammar positions follow the
//! object shape:
//!
//! ```text
//! object  := '{' '}' | '{' member (',' member)* '}'
//! member  := STRING ':' value
//! value   := STRING | INTEGER
//! ```
//!
//! `FLOAT`, `NULL` and `{` are valid tokens but are rejected at a value
//! position with [`Error::UnsupportedValue`].

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};
use crate::{Error, Map, Result, Value};
use tracing::debug;

/// Builds values from the tokens of a single source text.
///
/// The parser holds at most one unconsumed token. After the closing brace of
/// an object it pulls the following token straight away, so a character that
/// cannot be scanned there fails the parse even when the token itself would
/// be ignored.
#[derive(Debug)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Option<Token<'a>>,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Parser {
            lexer: Lexer::new(source),
            current: None,
        }
    }

    /// Returns the next unconsumed token, scanning it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lex`] if the token cannot be scanned.
    pub fn peek(&mut self) -> Result<Token<'a>> {
        match self.current {
            Some(token) => Ok(token),
            None => {
                let token = self.lexer.next_token()?;
                self.current = Some(token);
                Ok(token)
            }
        }
    }

    /// Consumes the next token if it has the given kind.
    fn eat(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token<'a>> {
        let token = self.peek()?;
        if token.kind != kind {
            return Err(unexpected(&token, expected));
        }
        self.current = None;
        Ok(token)
    }

    /// Consumes the closing brace and scans the token after it.
    fn close(&mut self) -> Result<()> {
        self.eat(TokenKind::RightBrace, "'}'")?;
        self.peek()?;
        Ok(())
    }

    /// Parses an object starting at the next token.
    ///
    /// # Errors
    ///
    /// Fails on the first token that does not fit the grammar, or on any lex
    /// error raised while pulling tokens.
    pub fn parse_object(&mut self) -> Result<Map> {
        self.eat(TokenKind::LeftBrace, "'{'")?;
        let mut result = Map::new();

        if self.peek()?.kind == TokenKind::RightBrace {
            self.close()?;
            return Ok(result);
        }

        loop {
            let key = self.eat(TokenKind::String, "string key")?;
            self.eat(TokenKind::Colon, "':'")?;
            let value = self.parse_value()?;
            result.insert(strip_quotes(key.lexeme).to_string(), value);

            let next = self.peek()?;
            match next.kind {
                TokenKind::RightBrace => {
                    self.close()?;
                    break;
                }
                TokenKind::Comma => {
                    self.eat(TokenKind::Comma, "','")?;
                }
                _ => return Err(unexpected(&next, "',' or '}'")),
            }
        }

        Ok(result)
    }

    /// Parses a primitive value at the next token.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedValue`] for `FLOAT`, `NULL` and `{`
    /// - [`Error::InvalidInteger`] for integers outside the `i64` range
    /// - [`Error::Parse`] for any other non-value token
    pub fn parse_value(&mut self) -> Result<Value> {
        let token = self.peek()?;
        match token.kind {
            TokenKind::String => {
                self.eat(TokenKind::String, "string")?;
                Ok(Value::String(strip_quotes(token.lexeme).to_string()))
            }
            TokenKind::Integer => {
                let value = token
                    .lexeme
                    .parse::<i64>()
                    .map_err(|_| Error::InvalidInteger {
                        lexeme: token.lexeme.to_string(),
                        position: token.offset,
                    })?;
                self.eat(TokenKind::Integer, "integer")?;
                Ok(Value::Integer(value))
            }
            TokenKind::Float | TokenKind::Null | TokenKind::LeftBrace => {
                Err(Error::UnsupportedValue {
                    found: token.kind,
                    position: token.offset,
                })
            }
            _ => Err(unexpected(&token, "value")),
        }
    }

    /// Checks that nothing but whitespace follows the parsed object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TrailingContent`] if another token remains, or
    /// [`Error::Lex`] if the remaining text cannot be scanned.
    pub fn finish(&mut self) -> Result<()> {
        let token = self.peek()?;
        if token.is_eof() {
            return Ok(());
        }
        debug!(kind = %token.kind, offset = token.offset, "trailing content after object");
        Err(Error::TrailingContent {
            found: token.kind,
            position: token.offset,
        })
    }
}

fn unexpected(token: &Token<'_>, expected: &'static str) -> Error {
    Error::Parse {
        expected,
        found: token.kind,
        position: token.offset,
    }
}

/// Removes one leading and one trailing quote. Escapes are left as written.
fn strip_quotes(lexeme: &str) -> &str {
    let inner = lexeme.strip_prefix('"').unwrap_or(lexeme);
    inner.strip_suffix('"').unwrap_or(inner)
}
