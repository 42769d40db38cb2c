//! JSON strategy
//!
//! Once traversal reaches a `serde_json::Value`, every remaining segment is
//! applied in JSON mode. Leaves are coerced to native values: strings borrow
//! from the document, numbers become [`Decimal`] (never a binary float),
//! booleans and null map directly, objects and arrays pass through.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use crate::error::{Error, Result};
use crate::path::{eq_ignore_case, Segment};
use crate::value::Value;

/// Apply `segment` to a JSON node.
pub(crate) fn step<'a>(
    node: &'a JsonValue,
    segment: Segment<'_>,
    is_last: bool,
    ignore_case: bool,
) -> Result<Value<'a>> {
    let text = segment.text();
    match node {
        JsonValue::Object(object) => lookup_key(object, text, ignore_case),
        JsonValue::Array(items) => {
            let element = segment
                .as_index()
                .and_then(|index| usize::try_from(index).ok())
                .and_then(|index| items.get(index));
            match element {
                Some(child) => coerce(child, text),
                None if is_last => coerce(node, text),
                None => Err(Error::invalid_index(text)),
            }
        }
        _ if is_last => coerce(node, text),
        _ => Err(Error::invalid_index(text)),
    }
}

/// Look `key` up in a JSON object: exact match, then (ignoring case) the
/// first key in document order. The child is coerced.
pub(crate) fn lookup_key<'a>(
    object: &'a JsonMap<String, JsonValue>,
    key: &str,
    ignore_case: bool,
) -> Result<Value<'a>> {
    let found = object.get(key).or_else(|| {
        if ignore_case {
            object
                .iter()
                .find(|(candidate, _)| eq_ignore_case(candidate, key))
                .map(|(_, child)| child)
        } else {
            None
        }
    });
    match found {
        Some(child) => coerce(child, key),
        None => Err(Error::member_not_found(key)),
    }
}

/// Convert a JSON node to the value handed back to callers.
pub fn coerce<'a>(node: &'a JsonValue, segment: &str) -> Result<Value<'a>> {
    Ok(match node {
        JsonValue::String(s) => Value::Str(s),
        JsonValue::Number(n) => Value::Decimal(number_to_decimal(n, segment)?),
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Null => Value::Null,
        JsonValue::Object(_) | JsonValue::Array(_) => Value::Json(node),
    })
}

/// Parse a JSON number from its textual form so no digits are lost.
pub fn number_to_decimal(number: &Number, segment: &str) -> Result<Decimal> {
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| Error::invalid_number(segment))
}
