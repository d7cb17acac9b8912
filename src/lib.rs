//! # flatjson
//!
//! A small recursive-descent parser for flat, JSON-like objects whose values
//! are strings or integers.
//!
//! ## Overview
//!
//! Parsing runs as a two-stage pipeline:
//!
//! - The [`Lexer`] classifies the next run of characters into a [`Token`] by
//!   trying an ordered table of patterns at the scan cursor. Whitespace is
//!   skipped internally and never handed to the parser.
//! - The [`Parser`] pulls tokens one at a time and builds a [`Map`] directly,
//!   with no intermediate syntax tree.
//!
//! The grammar is deliberately narrow. Floats, `null` and nested objects are
//! recognized by the lexer but rejected at a value position with
//! [`Error::UnsupportedValue`]. String escapes are kept exactly as written.
//!
//! ## Quick Start
//!
//! ```rust
//! use flatjson::{parse, Value};
//!
//! let map = parse(r#"{"k1":"v1","k2":"v2","id":2}"#).unwrap();
//!
//! let keys: Vec<_> = map.keys().map(String::as_str).collect();
//! assert_eq!(keys, vec!["k1", "k2", "id"]);
//! assert_eq!(map.get("id"), Some(&Value::Integer(2)));
//! ```
//!
//! ### Typed extraction
//!
//! ```rust
//! use flatjson::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Point { x: i32, y: i32 }
//!
//! let point: Point = from_str(r#"{ "x": 1, "y": -2 }"#).unwrap();
//! assert_eq!(point, Point { x: 1, y: -2 });
//! ```
//!
//! ### Errors
//!
//! ```rust
//! use flatjson::{parse, Error, TokenKind};
//!
//! let err = parse(r#"{"x":3.14}"#).unwrap_err();
//! assert_eq!(err, Error::UnsupportedValue { found: TokenKind::Float, position: 5 });
//! ```
//!
//! ## Logging
//!
//! Tokens are reported through [`tracing`] at `TRACE` level and parse
//! outcomes at `DEBUG`. The library never installs a subscriber.

pub mod de;
pub mod error;
pub mod lexer;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod token;
pub mod value;

pub use de::from_value;
pub use error::{Category, Error, Result};
pub use lexer::Lexer;
pub use map::Map;
pub use options::ParseOptions;
pub use parser::Parser;
pub use token::{Token, TokenKind};
pub use value::Value;

use serde::de::DeserializeOwned;
use tracing::debug;

/// Parses a single object from `input`.
///
/// The token after the closing brace is scanned but otherwise ignored; use
/// [`parse_with_options`] with [`ParseOptions::strict`] to reject it. Text
/// that cannot be scanned there is still an [`Error::Lex`].
///
/// # Examples
///
/// ```rust
/// use flatjson::parse;
///
/// let map = parse("  { \"a\" : 1 , \"b\" : 2 }  ").unwrap();
/// assert_eq!(map, parse(r#"{"a":1,"b":2}"#).unwrap());
/// ```
///
/// # Errors
///
/// Returns [`Error::Lex`] when the text contains a character no token starts
/// with, [`Error::Parse`] when a token is out of place, and
/// [`Error::UnsupportedValue`] for float, `null` or object values.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(input: &str) -> Result<Map> {
    parse_with_options(input, &ParseOptions::default())
}

/// Parses a single object from `input` with custom options.
///
/// # Errors
///
/// Everything [`parse`] returns, plus [`Error::InputTooLarge`] and
/// [`Error::TrailingContent`] depending on `options`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<Map> {
    if let Some(limit) = options.max_input_len {
        if input.len() > limit {
            return Err(Error::InputTooLarge {
                len: input.len(),
                limit,
            });
        }
    }

    debug!(len = input.len(), "parsing object");
    let mut parser = Parser::new(input);
    let result = parser.parse_object().and_then(|map| {
        if !options.allow_trailing {
            parser.finish()?;
        }
        Ok(map)
    });

    match &result {
        Ok(map) => debug!(entries = map.len(), "parsed object"),
        Err(err) => debug!(error = %err, "parse failed"),
    }
    result
}

/// Scans `input` into tokens, ending with [`TokenKind::EndOfInput`].
///
/// Useful for inspecting how text is split before parsing.
///
/// # Examples
///
/// ```rust
/// use flatjson::tokenize;
///
/// let tokens = tokenize(r#"{"id": 2}"#).unwrap();
/// let dump: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
/// assert_eq!(
///     dump,
///     vec![
///         "Token(LCURLY, \"{\")",
///         "Token(STRING, \"\\\"id\\\"\")",
///         "Token(COLON, \":\")",
///         "Token(INTEGER, \"2\")",
///         "Token(RCURLY, \"}\")",
///         "Token(EOF)",
///     ]
/// );
/// ```
///
/// # Errors
///
/// Returns the first [`Error::Lex`] encountered.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>> {
    Lexer::new(input).collect()
}

/// Parses an object from `input` and deserializes it into `T`.
///
/// # Examples
///
/// ```rust
/// use flatjson::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Entry { k1: String, id: u32 }
///
/// let entry: Entry = from_str(r#"{"k1":"v1","id":2}"#).unwrap();
/// assert_eq!(entry, Entry { k1: "v1".to_string(), id: 2 });
/// ```
///
/// # Errors
///
/// Returns a parse error if the text is not a valid object, or
/// [`Error::Custom`] if the object cannot be deserialized into `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(input: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(Value::Object(parse(input)?))
}
