//! Configuration options for parsing.
//!
//! The defaults match the plain [`parse`](crate::parse) entry point: no size
//! limit, and a token after the closing brace is ignored.
//!
//! ## Examples
//!
//! ```rust
//! use flatjson::{parse_with_options, Error, ParseOptions, TokenKind};
//!
//! // Ignored by default.
//! assert!(parse_with_options(r#"{"a":1} {}"#, &ParseOptions::new()).is_ok());
//!
//! let err = parse_with_options(r#"{"a":1} {}"#, &ParseOptions::strict()).unwrap_err();
//! assert_eq!(err, Error::TrailingContent { found: TokenKind::LeftBrace, position: 8 });
//!
//! let options = ParseOptions::new().with_max_input_len(4);
//! let err = parse_with_options(r#"{"a":1}"#, &options).unwrap_err();
//! assert_eq!(err, Error::InputTooLarge { len: 7, limit: 4 });
//! ```

/// Configuration options for parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Largest accepted input, in bytes. `None` means unlimited.
    pub max_input_len: Option<usize>,
    /// Whether tokens may follow the closing brace of the object.
    pub allow_trailing: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_input_len: None,
            allow_trailing: true,
        }
    }
}

impl ParseOptions {
    /// Creates default options (no size limit, trailing tokens ignored).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flatjson::ParseOptions;
    ///
    /// let options = ParseOptions::new();
    /// assert!(options.allow_trailing);
    /// assert_eq!(options.max_input_len, None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that reject any token after the closing brace.
    #[must_use]
    pub fn strict() -> Self {
        ParseOptions {
            allow_trailing: false,
            ..Default::default()
        }
    }

    /// Sets the largest accepted input size in bytes.
    #[must_use]
    pub fn with_max_input_len(mut self, limit: usize) -> Self {
        self.max_input_len = Some(limit);
        self
    }

    #[must_use]
    pub fn with_allow_trailing(mut self, allow: bool) -> Self {
        self.allow_trailing = allow;
        self
    }
}
