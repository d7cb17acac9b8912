/// Builds a [`Value`](crate::Value) with object-literal syntax.
///
/// Keys must be string literals. Values are anything with a
/// `From` conversion into `Value`, or a nested `{ ... }` object.
/// Wrap negative numbers in parentheses.
///
/// # Examples
///
/// ```rust
/// use flatjson::{flatjson, parse, Value};
///
/// let value = flatjson!({ "k1": "v1", "id": 2, "delta": (-1) });
/// let parsed = parse(r#"{"k1":"v1","id":2,"delta":-1}"#).unwrap();
/// assert_eq!(value, Value::Object(parsed));
/// ```
#[macro_export]
macro_rules! flatjson {
    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::flatjson!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Map, Value};

    #[test]
    fn test_flatjson_macro_primitives() {
        assert_eq!(flatjson!(42), Value::Integer(42));
        assert_eq!(flatjson!((-42)), Value::Integer(-42));
        assert_eq!(flatjson!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_flatjson_macro_objects() {
        assert_eq!(flatjson!({}), Value::Object(Map::new()));

        let obj = flatjson!({
            "name": "Alice",
            "age": 30,
        });

        match obj {
            Value::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
                assert_eq!(map.get("age"), Some(&Value::Integer(30)));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_flatjson_macro_nested() {
        let obj = flatjson!({ "outer": { "inner": 1 } });
        assert_eq!(obj["outer"]["inner"], Value::Integer(1));
    }
}
