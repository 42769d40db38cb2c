//! Resolved values
//!
//! [`Value`] is what a path resolves to. Values borrowed from the traversed
//! structure stay borrowed; JSON leaves are coerced to native values (strings
//! borrow from the document, numbers become [`Decimal`]).

use std::any::Any;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use crate::reflect::{Reflect, Shape};

/// A value found at a path.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    Null,
    Bool(bool),
    Decimal(Decimal),
    Str(&'a str),
    /// JSON node, passed through for further traversal. Nodes produced by a
    /// JSON lookup are always objects or arrays; a JSON value reached through
    /// a non-JSON container (a JSON root, a `HashMap<String, JsonValue>`
    /// entry, a record field) is held as is, scalars included, so later
    /// segments still apply JSON rules to it. Use [`json::coerce`] to
    /// normalize such a scalar.
    ///
    /// [`json::coerce`]: crate::json::coerce
    Json(&'a JsonValue),
    /// Any other value borrowed from the traversed structure.
    Object(&'a dyn Reflect),
}

impl<'a> Value<'a> {
    /// Normalize a reflected value: text, bool, decimal and null leaves become
    /// native variants and transparent wrappers are looked through.
    pub fn from_reflect(value: &'a dyn Reflect) -> Self {
        match value.shape() {
            Shape::Null => Value::Null,
            Shape::Text(text) => Value::Str(text),
            Shape::Bool(b) => Value::Bool(b),
            Shape::Decimal(d) => Value::Decimal(d),
            Shape::Json(node) => Value::Json(node),
            Shape::Deref(inner) => Value::from_reflect(inner),
            Shape::JsonObject(_)
            | Shape::Sequence(_)
            | Shape::Map(_)
            | Shape::Record(_)
            | Shape::Opaque => {
                Value::Object(value)
            }
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Str(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&'a JsonValue> {
        match self {
            Value::Json(node) => Some(*node),
            _ => None,
        }
    }

    pub fn as_reflect(&self) -> Option<&'a dyn Reflect> {
        match self {
            Value::Object(value) => Some(*value),
            _ => None,
        }
    }

    /// Downcast a borrowed object to its concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&'a T> {
        match self {
            Value::Object(value) => value.as_any().downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Shape of the underlying value, for `Object` values only.
    pub(crate) fn shape(&self) -> Option<Shape<'a>> {
        match self {
            Value::Object(value) => Some(value.shape()),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Decimal(_) => "decimal",
            Value::Str(_) => "string",
            Value::Json(_) => "json",
            Value::Object(value) => value.type_name(),
        }
    }

    /// Render as JSON. Records render their registered members; leaves without
    /// a JSON form render as `null`.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Decimal(d) => decimal_to_json(*d),
            Value::Str(s) => JsonValue::String((*s).to_string()),
            Value::Json(node) => (*node).clone(),
            Value::Object(value) => reflect_to_json(*value),
        }
    }
}

fn decimal_to_json(d: Decimal) -> JsonValue {
    Number::from_str(&d.to_string())
        .map(JsonValue::Number)
        .unwrap_or_else(|_| JsonValue::String(d.to_string()))
}

fn reflect_to_json(value: &dyn Reflect) -> JsonValue {
    match value.shape() {
        Shape::Sequence(seq) => JsonValue::Array(
            (0..seq.length())
                .filter_map(|index| seq.element(index))
                .map(|item| Value::from_reflect(item).to_json())
                .collect(),
        ),
        Shape::JsonObject(object) => JsonValue::Object(object.clone()),
        Shape::Map(map) => JsonValue::Object(
            map.pairs()
                .map(|(key, item)| (key.to_string(), Value::from_reflect(item).to_json()))
                .collect::<JsonMap<_, _>>(),
        ),
        Shape::Record(record) => JsonValue::Object(
            record
                .members()
                .iter()
                .filter_map(|member| {
                    record
                        .read(member)
                        .map(|item| (member.name.to_string(), Value::from_reflect(item).to_json()))
                })
                .collect::<JsonMap<_, _>>(),
        ),
        Shape::Opaque => value.to_json().unwrap_or(JsonValue::Null),
        _ => Value::from_reflect(value).to_json(),
    }
}

impl PartialEq for Value<'_> {
    /// Leaves compare by value, JSON nodes structurally, borrowed objects by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Decimal(a), Value::Decimal(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Json(a), Value::Json(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => std::ptr::addr_eq(*a, *b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Decimal(d) => f.debug_tuple("Decimal").field(d).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Json(node) => f.debug_tuple("Json").field(node).finish(),
            Value::Object(value) => write!(f, "Object({})", value.type_name()),
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            other => write!(f, "{}", other.to_json()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_reflect_normalizes_leaves() {
        let name = "John".to_string();
        assert_eq!(Value::from_reflect(&name), Value::Str("John"));
        assert_eq!(Value::from_reflect(&true), Value::Bool(true));

        let missing: Option<i32> = None;
        assert!(Value::from_reflect(&missing).is_null());

        let present: Option<i32> = Some(7);
        assert_eq!(Value::from_reflect(&present).downcast_ref::<i32>(), Some(&7));
    }

    #[test]
    fn test_decimal_renders_as_json_number() {
        let value = Value::Decimal(Decimal::new(150, 2));
        assert_eq!(value.to_json().to_string(), "1.50");
    }

    #[test]
    fn test_sequence_renders_as_array() {
        let numbers = vec![1i64, 2, 3];
        assert_eq!(Value::from_reflect(&numbers).to_json(), json!([1, 2, 3]));
    }

    #[test]
    fn test_object_equality_is_identity() {
        let a = vec![1];
        let b = vec![1];
        assert_eq!(Value::from_reflect(&a), Value::from_reflect(&a));
        assert_ne!(Value::from_reflect(&a), Value::from_reflect(&b));
    }
}
