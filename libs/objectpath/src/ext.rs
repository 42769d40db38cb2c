//! Convenience wrappers around [`get_value`](crate::get_value)

use crate::engine::get_value;
use crate::error::Result;
use crate::reflect::Reflect;
use crate::value::Value;

/// Method-style path access with case-insensitive matching.
///
/// ```
/// use objectpath::ObjectPathExt;
/// use std::collections::HashMap;
///
/// let dict: HashMap<String, i32> = HashMap::from([("Age".to_string(), 30)]);
/// assert_eq!(dict.value_by_path("age").unwrap().downcast_ref::<i32>(), Some(&30));
/// assert!(dict.value_by_path_or_null("Missing").is_null());
/// ```
pub trait ObjectPathExt {
    /// Resolve `path`, propagating any failure unchanged.
    fn value_by_path(&self, path: &str) -> Result<Value<'_>>;

    /// Resolve `path`, turning any failure into `Value::Null`.
    fn value_by_path_or_null(&self, path: &str) -> Value<'_>;
}

impl<T: Reflect> ObjectPathExt for T {
    fn value_by_path(&self, path: &str) -> Result<Value<'_>> {
        get_value(self, path, true)
    }

    fn value_by_path_or_null(&self, path: &str) -> Value<'_> {
        get_value_or_null(self, path, true)
    }
}

/// Like [`get_value`], but any failure yields `Value::Null`.
pub fn get_value_or_null<'a>(root: &'a dyn Reflect, path: &str, ignore_case: bool) -> Value<'a> {
    get_value(root, path, ignore_case).unwrap_or(Value::Null)
}
