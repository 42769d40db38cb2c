//! Member resolution cache
//!
//! Memoizes lookups of a member name in a record type's registration table,
//! keyed by (type, name, case mode, member kind). Misses are cached too, so a
//! given key scans the table at most once per cache in the common case.
//!
//! The store is a sharded concurrent map: lookups for unrelated types never
//! contend on a single lock. Entries are never evicted; the key space is
//! bounded by the (type, member name) pairs an application actually queries.

use std::any::TypeId;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;

use crate::path::eq_ignore_case;
use crate::reflect::{Member, MemberKind, RecordRef};

static GLOBAL: Lazy<Arc<MemberCache>> = Lazy::new(|| Arc::new(MemberCache::new()));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TableKey {
    type_id: TypeId,
    ignore_case: bool,
    kind: MemberKind,
}

/// Concurrent memo table from (type, member name, case mode, kind) to a
/// resolved member or a cached absence.
#[derive(Default)]
pub struct MemberCache {
    tables: DashMap<TableKey, DashMap<Box<str>, Option<&'static Member>>>,
    scans: AtomicUsize,
}

impl MemberCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by [`get_value`](crate::get_value).
    pub fn global() -> Arc<MemberCache> {
        Arc::clone(&GLOBAL)
    }

    /// Resolve `name` on `record` among members of `kind`.
    ///
    /// Case-sensitive lookups match exactly. Case-insensitive lookups prefer
    /// an exact match, then take the first member in registration order whose
    /// name compares equal ignoring case.
    pub fn resolve(
        &self,
        record: &RecordRef<'_>,
        name: &str,
        ignore_case: bool,
        kind: MemberKind,
    ) -> Option<&'static Member> {
        let key = TableKey {
            type_id: record.type_id(),
            ignore_case,
            kind,
        };

        if let Some(table) = self.tables.get(&key) {
            if let Some(hit) = table.get(name) {
                return *hit;
            }
        }

        let resolved = self.scan(record, name, ignore_case, kind);

        // First writer wins; a concurrent scan for the same key produced the same answer.
        *self
            .tables
            .entry(key)
            .or_default()
            .entry(Box::from(name))
            .or_insert(resolved)
    }

    fn scan(
        &self,
        record: &RecordRef<'_>,
        name: &str,
        ignore_case: bool,
        kind: MemberKind,
    ) -> Option<&'static Member> {
        self.scans.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(
            type_name = record.type_name(),
            member = name,
            ignore_case,
            ?kind,
            "scanning member table"
        );

        let members = record.members();
        let exact = members
            .iter()
            .find(|member| member.kind == kind && member.name == name);
        if exact.is_some() || !ignore_case {
            return exact;
        }
        members
            .iter()
            .find(|member| member.kind == kind && eq_ignore_case(member.name, name))
    }

    /// Number of cached (type, name, mode, kind) entries, hits and misses alike.
    pub fn len(&self) -> usize {
        self.tables.iter().map(|table| table.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of registration-table scans performed so far.
    pub fn scans(&self) -> usize {
        self.scans.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for MemberCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemberCache")
            .field("entries", &self.len())
            .field("scans", &self.scans())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::{Reflect, Shape};

    struct Sample {
        name: String,
    }

    crate::record!(Sample { fields: [Name => name] });

    fn record_of(sample: &Sample) -> RecordRef<'_> {
        match sample.shape() {
            Shape::Record(record) => record,
            other => panic!("expected record shape, got {:?}", other),
        }
    }

    #[test]
    fn test_hit_and_miss_are_memoized() {
        let cache = MemberCache::new();
        let sample = Sample {
            name: "John".to_string(),
        };
        let record = record_of(&sample);

        let hit = cache.resolve(&record, "name", true, MemberKind::Field);
        assert_eq!(hit.map(|m| m.name), Some("Name"));
        let miss = cache.resolve(&record, "Missing", true, MemberKind::Field);
        assert!(miss.is_none());
        assert_eq!(cache.scans(), 2);

        cache.resolve(&record, "name", true, MemberKind::Field);
        cache.resolve(&record, "Missing", true, MemberKind::Field);
        assert_eq!(cache.scans(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_case_mode_is_part_of_key() {
        let cache = MemberCache::new();
        let sample = Sample {
            name: "John".to_string(),
        };
        let record = record_of(&sample);

        assert!(cache
            .resolve(&record, "name", false, MemberKind::Field)
            .is_none());
        assert!(cache
            .resolve(&record, "name", true, MemberKind::Field)
            .is_some());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_kind_filters_members() {
        let cache = MemberCache::new();
        let sample = Sample {
            name: "John".to_string(),
        };
        let record = record_of(&sample);
        assert!(cache
            .resolve(&record, "Name", false, MemberKind::Property)
            .is_none());
    }
}
