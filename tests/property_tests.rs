//! Property-based tests for the lexer and parser.
//!
//! These complement the example-based tests by checking properties that
//! should hold for any input: rendering a map and parsing it back gives the
//! same map, whitespace between tokens never changes the result, and the
//! lexer never panics or moves backwards.

use flatjson::{parse, Lexer, Map, TokenKind, Value};
use proptest::prelude::*;

fn key() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_ ]{0,8}"
}

fn value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Integer),
        "[a-zA-Z0-9 .,:{}-]{0,12}".prop_map(Value::String),
    ]
}

fn map() -> impl Strategy<Value = Map> {
    prop::collection::vec((key(), value()), 0..8).prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_display_then_parse(map in map()) {
        let rendered = map.to_string();
        let parsed = parse(&rendered).unwrap();
        prop_assert_eq!(
            parsed.iter().collect::<Vec<_>>(),
            map.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn prop_whitespace_between_tokens(map in map(), pad in "[ \t\r\n]{1,3}") {
        let compact = map.to_string();
        let tokens = flatjson::tokenize(&compact).unwrap();
        let padded: String = tokens
            .iter()
            .map(|t| format!("{}{}", t.lexeme, pad))
            .collect();
        prop_assert_eq!(parse(&padded).unwrap(), parse(&compact).unwrap());
    }

    #[test]
    fn prop_lexer_never_panics_or_regresses(input in "\\PC{0,40}") {
        let mut lexer = Lexer::new(&input);
        let mut last = 0;
        for _ in 0..=input.len() {
            match lexer.next_token() {
                Ok(token) => {
                    prop_assert!(token.offset >= last);
                    prop_assert!(lexer.offset() >= token.offset);
                    prop_assert_eq!(token.is_eof(), token.lexeme.is_empty());
                    last = lexer.offset();
                    if token.kind == TokenKind::EndOfInput {
                        break;
                    }
                }
                Err(err) => {
                    prop_assert_eq!(err.offset(), Some(lexer.offset()));
                    break;
                }
            }
        }
    }

    #[test]
    fn prop_parse_never_panics(input in "[{}\":,0-9a-z .\\\\-]{0,30}") {
        let _ = parse(&input);
    }

    #[test]
    fn prop_integers_parse_exactly(n in any::<i64>()) {
        let map = parse(&format!(r#"{{"n":{n}}}"#)).unwrap();
        prop_assert_eq!(map.get("n"), Some(&Value::Integer(n)));
    }
}
