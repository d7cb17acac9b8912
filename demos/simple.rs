//! Parse a small document and inspect the result.
//!
//! Run with: cargo run --example simple

use flatjson::{parse, tokenize, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let text = r#" {"k1":"v1","k2":"v2","id":2}"#;

    for token in tokenize(text)? {
        println!("{}", token);
    }

    let map = parse(text)?;
    println!("Parsed: {}", map);

    if let Some(Value::Integer(id)) = map.get("id") {
        println!("id = {}", id);
    }

    let bad = r#"{"x": 3.14}"#;
    match parse(bad) {
        Ok(map) => println!("Parsed: {}", map),
        Err(err) => println!("Error: {}", err),
    }

    Ok(())
}
