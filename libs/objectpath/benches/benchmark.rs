//! Criterion benchmarks for path resolution

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use objectpath::{get_value, record, tokenize, MemberCache, PathResolver, ResolveOptions};
use serde_json::json;

struct Address {
    city: String,
    street: String,
}

struct Person {
    name: String,
    age: i32,
    address: Address,
    tags: Vec<String>,
}

record!(Address { fields: [City => city, Street => street] });
record!(Person {
    fields: [Name => name, Age => age, Address => address, Tags => tags],
});

fn sample_person() -> Person {
    Person {
        name: "John".to_string(),
        age: 30,
        address: Address {
            city: "New York".to_string(),
            street: "123 Main St".to_string(),
        },
        tags: vec!["a".to_string(), "b".to_string(), "c".to_string()],
    }
}

fn custom_criterion() -> Criterion {
    Criterion::default()
        .sample_size(20)
        .warm_up_time(Duration::from_millis(100))
        .measurement_time(Duration::from_secs(1))
        .nresamples(1000)
        .noise_threshold(0.05)
}

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize", |b| {
        b.iter(|| tokenize(black_box("Department.Manager[3].Address.City")))
    });
}

fn bench_record_paths(c: &mut Criterion) {
    let person = sample_person();

    c.bench_function("record_exact_case", |b| {
        b.iter(|| get_value(&person, black_box("Address.City"), false).unwrap())
    });
    c.bench_function("record_ignore_case", |b| {
        b.iter(|| get_value(&person, black_box("address.city"), true).unwrap())
    });
    c.bench_function("record_sequence_index", |b| {
        b.iter(|| get_value(&person, black_box("Tags[2]"), true).unwrap())
    });
}

fn bench_cold_cache(c: &mut Criterion) {
    let person = sample_person();

    c.bench_function("record_cold_cache", |b| {
        b.iter(|| {
            let resolver = PathResolver::new(Arc::new(MemberCache::new()));
            resolver.resolve(&person, black_box("Address.City")).unwrap()
        })
    });
}

fn bench_map_paths(c: &mut Criterion) {
    let large: HashMap<String, String> = (0..1000)
        .map(|i| (format!("key{}", i), format!("value{}", i)))
        .collect();
    let strict = PathResolver::default().with_options(ResolveOptions { ignore_case: false });

    c.bench_function("map_exact_key", |b| {
        b.iter(|| strict.resolve(&large, black_box("key500")).unwrap())
    });
    c.bench_function("map_case_insensitive_scan", |b| {
        b.iter(|| get_value(&large, black_box("KEY500"), true).unwrap())
    });
}

fn bench_json_paths(c: &mut Criterion) {
    let doc = json!({
        "name": "John",
        "age": 30,
        "phoneNumbers": [
            {"type": "home", "number": "212-555-1234"},
            {"type": "office", "number": "212-555-5678"}
        ]
    });

    c.bench_function("json_nested", |b| {
        b.iter(|| get_value(&doc, black_box("phoneNumbers[1].number"), true).unwrap())
    });
    c.bench_function("json_number_coercion", |b| {
        b.iter(|| get_value(&doc, black_box("age"), true).unwrap())
    });
}

criterion_group! {
    name = benches;
    config = custom_criterion();
    targets =
        bench_tokenize,
        bench_record_paths,
        bench_cold_cache,
        bench_map_paths,
        bench_json_paths
}
criterion_main!(benches);
