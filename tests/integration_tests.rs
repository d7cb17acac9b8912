use flatjson::{
    flatjson, from_str, from_value, parse, parse_with_options, Error, Lexer, Map, ParseOptions,
    Parser, TokenKind, Value,
};
use serde::Deserialize;

#[derive(Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    role: Option<String>,
}

#[allow(dead_code)]
#[derive(Deserialize, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
enum Level {
    Debug,
    Info,
    Warn,
}

#[derive(Deserialize, Debug, PartialEq)]
struct Setting {
    level: Level,
    retries: u8,
}

#[test]
fn test_typed_struct() {
    let user: User = from_str(r#"{"id": 123, "name": "Alice"}"#).unwrap();
    assert_eq!(
        user,
        User {
            id: 123,
            name: "Alice".to_string(),
            role: None,
        }
    );

    let user: User = from_str(r#"{"name": "Bob", "role": "admin", "id": 7}"#).unwrap();
    assert_eq!(user.role.as_deref(), Some("admin"));
}

#[test]
fn test_typed_enum_field() {
    let setting: Setting = from_str(r#"{"level":"warn","retries":3}"#).unwrap();
    assert_eq!(
        setting,
        Setting {
            level: Level::Warn,
            retries: 3,
        }
    );
}

#[test]
fn test_typed_errors() {
    let err = from_str::<User>(r#"{"id": "123", "name": "Alice"}"#).unwrap_err();
    assert!(matches!(err, Error::Custom(_)));

    let err = from_str::<User>(r#"{"name": "Alice"}"#).unwrap_err();
    assert!(err.to_string().contains("missing field `id`"));

    let err = from_str::<Setting>(r#"{"level":"info","retries":300}"#).unwrap_err();
    assert!(matches!(err, Error::Custom(_)));
}

#[test]
fn test_serialize_with_serde_json() {
    let map = parse(r#"{"name":"Ada","id":1815}"#).unwrap();
    let json = serde_json::to_string(&Value::Object(map)).unwrap();
    assert_eq!(json, r#"{"name":"Ada","id":1815}"#);
}

#[test]
fn test_deserialize_value_from_serde_json() {
    let value: Value = serde_json::from_str(r#"{"a":"x","b":-2}"#).unwrap();
    assert_eq!(value, flatjson!({ "a": "x", "b": (-2) }));

    assert!(serde_json::from_str::<Value>("true").is_err());
    assert!(serde_json::from_str::<Value>("1.5").is_err());
}

#[test]
fn test_display_reparses() {
    let source = r#"{ "k1" : "v\"1" , "n" : -40 }"#;
    let map = parse(source).unwrap();
    let rendered = map.to_string();
    assert_eq!(rendered, r#"{"k1":"v\"1","n":-40}"#);
    assert_eq!(parse(&rendered).unwrap(), map);
}

#[test]
fn test_map_from_str() {
    let map: Map = r#"{"a": 1}"#.parse().unwrap();
    assert_eq!(map.get("a"), Some(&Value::Integer(1)));

    let err = "{".parse::<Map>().unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn test_from_value_on_parsed_map() {
    let map = parse(r#"{"id":1,"name":"x"}"#).unwrap();
    let user: User = from_value(Value::Object(map)).unwrap();
    assert_eq!(user.id, 1);
}

#[test]
fn test_parser_step_by_step() {
    let mut parser = Parser::new(r#"{"a":1} {"b":2}"#);
    let first = parser.parse_object().unwrap();
    assert_eq!(first.get("a"), Some(&Value::Integer(1)));

    let second = parser.parse_object().unwrap();
    assert_eq!(second.get("b"), Some(&Value::Integer(2)));
    assert!(parser.finish().is_ok());
}

#[test]
fn test_parser_peek_does_not_consume() {
    let mut parser = Parser::new("  {}");
    let token = parser.peek().unwrap();
    assert_eq!(token.kind, TokenKind::LeftBrace);
    assert_eq!(token.offset, 2);
    assert_eq!(parser.peek().unwrap(), token);
    assert!(parser.parse_object().unwrap().is_empty());
}

#[test]
fn test_lexer_resume_after_error() {
    let source = r#"{"a":1 ? "b":2}"#;
    let mut lexer = Lexer::new(source);
    let err = loop {
        match lexer.next_token() {
            Ok(token) if token.is_eof() => panic!("expected a lex error"),
            Ok(_) => continue,
            Err(err) => break err,
        }
    };
    let offset = err.offset().unwrap();
    assert_eq!(offset, 7);

    let rest: Vec<TokenKind> = Lexer::with_offset(source, offset + 1)
        .map(|t| t.unwrap().kind)
        .collect();
    assert_eq!(
        rest,
        vec![
            TokenKind::String,
            TokenKind::Colon,
            TokenKind::Integer,
            TokenKind::RightBrace,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_options_combined() {
    let options = ParseOptions::new()
        .with_max_input_len(64)
        .with_allow_trailing(false);
    assert!(parse_with_options(r#"{"a":1}"#, &options).is_ok());
    assert!(matches!(
        parse_with_options(r#"{"a":1},"#, &options),
        Err(Error::TrailingContent {
            found: TokenKind::Comma,
            position: 7,
        })
    ));
    assert!(matches!(
        parse_with_options(&" ".repeat(65), &options),
        Err(Error::InputTooLarge { len: 65, limit: 64 })
    ));
}

#[test]
fn test_parses_on_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let source = format!(r#"{{"thread":{i},"name":"t{i}"}}"#);
                parse(&source).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let map = handle.join().unwrap();
        assert_eq!(map.get("thread"), Some(&Value::Integer(i as i64)));
    }
}
