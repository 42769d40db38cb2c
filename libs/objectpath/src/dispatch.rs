//! Shape dispatcher
//!
//! Applies one segment to the current value. First match wins:
//!
//! 1. JSON node or bare JSON object map: JSON strategy.
//! 2. Segment parses as an integer: sequence index. Never reinterpreted as a
//!    map key or member name, even when the value is a map or record.
//! 3. Keyed map: exact key, then (ignoring case) a scan of the entries.
//! 4. Record: cached property lookup, then cached field lookup.

use crate::cache::MemberCache;
use crate::error::{Error, Result};
use crate::json;
use crate::path::{eq_ignore_case, Segment, Step};
use crate::reflect::{KeyedMap, MemberKind, RecordRef, Sequence, Shape};
use crate::value::Value;

/// Per-call settings the dispatcher needs.
#[derive(Clone, Copy)]
pub(crate) struct Dispatch<'c> {
    pub cache: &'c MemberCache,
    pub ignore_case: bool,
}

impl Dispatch<'_> {
    /// Apply `segment` to `current`. `current` must not be null.
    pub fn step<'a>(
        &self,
        current: Value<'a>,
        segment: Segment<'_>,
        is_last: bool,
    ) -> Result<Value<'a>> {
        if let Value::Json(node) = current {
            return json::step(node, segment, is_last, self.ignore_case);
        }

        let shape = current.shape();
        if let Some(Shape::JsonObject(object)) = shape {
            return json::lookup_key(object, segment.text(), self.ignore_case);
        }

        match segment.step() {
            Step::Index(index) => match shape {
                Some(Shape::Sequence(seq)) => index_into(seq, index, segment),
                _ => Err(Error::index_out_of_range(segment.text())),
            },
            Step::Name(name) => match shape {
                Some(Shape::Map(map)) => self.map_lookup(map, name),
                Some(Shape::Record(record)) => self.member_lookup(&record, name),
                _ => Err(Error::member_not_found(name)),
            },
        }
    }

    fn map_lookup<'a>(&self, map: &'a dyn KeyedMap, key: &str) -> Result<Value<'a>> {
        let found = map.lookup(key).or_else(|| {
            if self.ignore_case {
                map.pairs()
                    .find(|(candidate, _)| eq_ignore_case(candidate, key))
                    .map(|(_, value)| value)
            } else {
                None
            }
        });
        found
            .map(Value::from_reflect)
            .ok_or_else(|| Error::member_not_found(key))
    }

    fn member_lookup<'a>(&self, record: &RecordRef<'a>, name: &str) -> Result<Value<'a>> {
        let member = self
            .cache
            .resolve(record, name, self.ignore_case, MemberKind::Property)
            .or_else(|| {
                self.cache
                    .resolve(record, name, self.ignore_case, MemberKind::Field)
            });
        member
            .and_then(|member| record.read(member))
            .map(Value::from_reflect)
            .ok_or_else(|| Error::member_not_found(name))
    }
}

fn index_into<'a>(seq: &'a dyn Sequence, index: i32, segment: Segment<'_>) -> Result<Value<'a>> {
    usize::try_from(index)
        .ok()
        .filter(|&position| position < seq.length())
        .and_then(|position| seq.element(position))
        .map(Value::from_reflect)
        .ok_or_else(|| Error::index_out_of_range(segment.text()))
}
