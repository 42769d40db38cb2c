//! Traversal engine
//!
//! Drives the segment loop: tokenize the path, then hand each segment and the
//! current value to the dispatcher, re-dispatching on the value's shape at
//! every step (record → map → sequence → JSON is fine).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cache::MemberCache;
use crate::dispatch::Dispatch;
use crate::error::{Error, Result};
use crate::path::tokenize;
use crate::reflect::Reflect;
use crate::value::Value;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolveOptions {
    /// Match member names and map/JSON keys ignoring case.
    pub ignore_case: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self { ignore_case: true }
    }
}

/// Path resolver bound to a member cache.
///
/// [`PathResolver::default`] shares the process-wide cache. Use
/// [`PathResolver::new`] with a private [`MemberCache`] to observe or isolate
/// caching behaviour.
#[derive(Clone, Debug)]
pub struct PathResolver {
    cache: Arc<MemberCache>,
    options: ResolveOptions,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new(MemberCache::global())
    }
}

impl PathResolver {
    pub fn new(cache: Arc<MemberCache>) -> Self {
        Self {
            cache,
            options: ResolveOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    pub fn cache(&self) -> &Arc<MemberCache> {
        &self.cache
    }

    /// Resolve `path` against `root` with this resolver's options.
    pub fn resolve<'a>(&self, root: &'a dyn Reflect, path: &str) -> Result<Value<'a>> {
        self.get_value(root, path, self.options.ignore_case)
    }

    /// Resolve `path` against `root`.
    ///
    /// A null root (e.g. `None`) yields `Value::Null` without looking at the
    /// path. A null reached after the last segment is returned as null; a null
    /// with segments still pending fails with `NullTraversal`.
    pub fn get_value<'a>(
        &self,
        root: &'a dyn Reflect,
        path: &str,
        ignore_case: bool,
    ) -> Result<Value<'a>> {
        self.get_value_from(Value::from_reflect(root), path, ignore_case)
    }

    /// Resolve `path` starting from an already resolved value, e.g. a JSON
    /// subtree returned by an earlier call.
    pub fn get_value_from<'a>(
        &self,
        root: Value<'a>,
        path: &str,
        ignore_case: bool,
    ) -> Result<Value<'a>> {
        if root.is_null() {
            return Ok(Value::Null);
        }

        let dispatch = Dispatch {
            cache: &self.cache,
            ignore_case,
        };
        let segments = tokenize(path);
        let last = segments.len().saturating_sub(1);

        let mut current = root;
        for (position, segment) in segments.iter().enumerate() {
            if current.is_null() {
                tracing::debug!(path, segment = segment.text(), "segment applied to null");
                return Err(Error::null_traversal(segment.text()));
            }
            current = dispatch
                .step(current, *segment, position == last)
                .inspect_err(|err| {
                    tracing::debug!(path, segment = segment.text(), error = %err, "path resolution failed");
                })?;
        }

        Ok(current)
    }
}

/// Resolve `path` against `root` using the process-wide member cache.
///
/// ```
/// use objectpath::get_value;
/// use serde_json::json;
///
/// let doc = json!({"address": {"city": "NY"}});
/// let city = get_value(&doc, "Address.City", true).unwrap();
/// assert_eq!(city.as_str(), Some("NY"));
/// ```
pub fn get_value<'a>(root: &'a dyn Reflect, path: &str, ignore_case: bool) -> Result<Value<'a>> {
    PathResolver::default().get_value(root, path, ignore_case)
}
