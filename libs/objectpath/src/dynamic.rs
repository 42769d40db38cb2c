//! Loosely typed values
//!
//! [`Dynamic`] is an owned tree of nulls, booleans, integers, decimals, text,
//! lists and string-keyed maps, for data built at runtime rather than declared
//! as records.

use std::any::Any;
use std::collections::HashMap;

use rust_decimal::Decimal;
use serde_json::Value as JsonValue;

use crate::error::Result;
use crate::json::number_to_decimal;
use crate::reflect::{Reflect, Shape};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Dynamic {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Decimal(Decimal),
    Text(String),
    List(Vec<Dynamic>),
    Map(HashMap<String, Dynamic>),
}

impl Dynamic {
    /// Build a map from `(key, value)` pairs.
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Dynamic)>,
    {
        Dynamic::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    pub fn list<I: IntoIterator<Item = Dynamic>>(items: I) -> Self {
        Dynamic::List(items.into_iter().collect())
    }

    pub fn as_map(&self) -> Option<&HashMap<String, Dynamic>> {
        match self {
            Dynamic::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Convert a JSON document. Integral numbers that fit in `i64` become
    /// `Integer`, other numbers `Decimal`.
    pub fn from_json(value: &JsonValue) -> Result<Self> {
        Ok(match value {
            JsonValue::Null => Dynamic::Null,
            JsonValue::Bool(b) => Dynamic::Bool(*b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Dynamic::Integer(i),
                None => Dynamic::Decimal(number_to_decimal(n, "")?),
            },
            JsonValue::String(s) => Dynamic::Text(s.clone()),
            JsonValue::Array(items) => Dynamic::List(
                items
                    .iter()
                    .map(Dynamic::from_json)
                    .collect::<Result<Vec<_>>>()?,
            ),
            JsonValue::Object(object) => Dynamic::Map(
                object
                    .iter()
                    .map(|(key, value)| Ok((key.clone(), Dynamic::from_json(value)?)))
                    .collect::<Result<HashMap<_, _>>>()?,
            ),
        })
    }
}

impl Reflect for Dynamic {
    fn shape(&self) -> Shape<'_> {
        match self {
            Dynamic::Null => Shape::Null,
            Dynamic::Bool(b) => Shape::Bool(*b),
            Dynamic::Integer(i) => Shape::Deref(i),
            Dynamic::Decimal(d) => Shape::Decimal(*d),
            Dynamic::Text(s) => Shape::Text(s),
            Dynamic::List(items) => Shape::Deref(items),
            Dynamic::Map(map) => Shape::Deref(map),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl From<bool> for Dynamic {
    fn from(value: bool) -> Self {
        Dynamic::Bool(value)
    }
}

impl From<i32> for Dynamic {
    fn from(value: i32) -> Self {
        Dynamic::Integer(value.into())
    }
}

impl From<i64> for Dynamic {
    fn from(value: i64) -> Self {
        Dynamic::Integer(value)
    }
}

impl From<Decimal> for Dynamic {
    fn from(value: Decimal) -> Self {
        Dynamic::Decimal(value)
    }
}

impl From<&str> for Dynamic {
    fn from(value: &str) -> Self {
        Dynamic::Text(value.to_string())
    }
}

impl From<String> for Dynamic {
    fn from(value: String) -> Self {
        Dynamic::Text(value)
    }
}

impl From<Vec<Dynamic>> for Dynamic {
    fn from(value: Vec<Dynamic>) -> Self {
        Dynamic::List(value)
    }
}

impl From<HashMap<String, Dynamic>> for Dynamic {
    fn from(value: HashMap<String, Dynamic>) -> Self {
        Dynamic::Map(value)
    }
}

impl<T: Into<Dynamic>> From<Option<T>> for Dynamic {
    fn from(value: Option<T>) -> Self {
        value.map_or(Dynamic::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use serde_json::json;

    #[test]
    fn test_integer_is_downcastable() {
        let age = Dynamic::from(30);
        assert_eq!(Value::from_reflect(&age).downcast_ref::<i64>(), Some(&30));
    }

    #[test]
    fn test_nested_map_and_list_shapes() {
        let data = Dynamic::map([
            ("Name", Dynamic::from("John")),
            ("Tags", Dynamic::list(["a".into(), "b".into()])),
        ]);
        let value = Value::from_reflect(&data);
        assert!(value
            .downcast_ref::<HashMap<String, Dynamic>>()
            .is_some_and(|map| map.len() == 2));
    }

    #[test]
    fn test_from_json() {
        let doc = json!({"name": "John", "age": 30, "score": 9.5, "tags": ["x"], "none": null});
        let dynamic = Dynamic::from_json(&doc).unwrap();
        let map = dynamic.as_map().unwrap();
        assert_eq!(map["name"], Dynamic::from("John"));
        assert_eq!(map["age"], Dynamic::Integer(30));
        assert_eq!(map["score"], Dynamic::Decimal(Decimal::new(95, 1)));
        assert_eq!(map["tags"], Dynamic::list([Dynamic::from("x")]));
        assert_eq!(map["none"], Dynamic::Null);
    }
}
