//! Property-based tests using QuickCheck

use std::collections::HashMap;

use objectpath::{get_value, tokenize, Reason};
use quickcheck::{QuickCheck, TestResult};

mod test_support;

/// Property: no segment is empty or contains a separator
#[test]
fn prop_segments_are_clean() {
    fn prop(path: String) -> bool {
        tokenize(&path).iter().all(|segment| {
            !segment.text().is_empty() && !segment.text().contains(&['.', '[', ']'][..])
        })
    }

    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: joining segments with dots tokenizes back to the same segments
#[test]
fn prop_bracket_and_dot_forms_agree() {
    fn prop(path: String) -> bool {
        let segments: Vec<&str> = tokenize(&path).iter().map(|s| s.text()).collect();
        let dotted = segments.join(".");
        let again: Vec<&str> = tokenize(&dotted).iter().map(|s| s.text()).collect();
        segments == again
    }

    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: `[i]` on a sequence matches direct indexing, in and out of range
#[test]
fn prop_index_matches_direct_access() {
    fn prop(items: Vec<i32>, index: i32) -> TestResult {
        let path = format!("[{}]", index);
        let result = get_value(&items, &path, true);

        let expected = usize::try_from(index).ok().and_then(|i| items.get(i));
        match (expected, result) {
            (Some(item), Ok(value)) => TestResult::from_bool(value.downcast_ref::<i32>() == Some(item)),
            (None, Err(err)) => TestResult::from_bool(err.reason() == Reason::IndexOutOfRange),
            _ => TestResult::failed(),
        }
    }

    QuickCheck::new()
        .tests(300)
        .quickcheck(prop as fn(Vec<i32>, i32) -> TestResult);
}

/// Property: a key present in a map always resolves, ignoring case or not
#[test]
fn prop_present_key_resolves() {
    fn prop(entries: Vec<(String, String)>) -> TestResult {
        let map: HashMap<String, String> = entries.into_iter().collect();
        for (key, value) in &map {
            let segments = tokenize(key);
            // Keys the tokenizer would split or treat as indices are not addressable by name.
            if segments.len() != 1 || segments[0].text() != key || segments[0].as_index().is_some() {
                continue;
            }
            match get_value(&map, key, false) {
                Ok(found) if found.as_str() == Some(value.as_str()) => {}
                _ => return TestResult::failed(),
            }
            if get_value(&map, key, true).is_err() {
                return TestResult::failed();
            }
        }
        TestResult::passed()
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(Vec<(String, String)>) -> TestResult);
}

/// Property: resolving twice gives the same answer
#[test]
fn prop_resolution_is_idempotent() {
    let people = test_support::people();
    let paths = vec![
        "[0].Name",
        "[1].address.city",
        "[2].AGE",
        "[3].Name",
        "[0].Nope",
        "[0].Address.City.Length",
        "Name",
        "",
    ];

    for path in paths {
        let first = get_value(&people, path, true);
        let second = get_value(&people, path, true);
        assert_eq!(first, second, "path {:?}", path);
    }
}
