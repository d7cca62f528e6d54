use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_kwjson::{decode, encode, Keyword, Map, Value};

fn operation(i: u64) -> Value {
    let f = if i % 2 == 0 { "w" } else { "r" };
    Value::Array(vec![
        Value::Keyword(Keyword::new(f)),
        Value::from(i % 16),
        if i % 2 == 0 { Value::from(i) } else { Value::Null },
    ])
}

fn history(size: u64) -> Value {
    let entries = (0..size)
        .map(|i| {
            let mut map = Map::new();
            map.insert(Keyword::new("type"), Value::Keyword(Keyword::new("invoke")));
            map.insert(Keyword::new("process"), Value::from(i % 5));
            map.insert(
                Keyword::new("value"),
                Value::Array(vec![operation(i), operation(i + 1)]),
            );
            Value::Object(map)
        })
        .collect();
    Value::Array(entries)
}

fn benchmark_encode_simple(c: &mut Criterion) {
    let value = operation(6);

    c.bench_function("encode_operation", |b| b.iter(|| encode(black_box(&value))));
}

fn benchmark_decode_simple(c: &mut Criterion) {
    let text = r#"[":w",6,6]"#;

    c.bench_function("decode_operation", |b| b.iter(|| decode(black_box(text))));
}

fn benchmark_encode_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_history");

    for size in [10, 100, 1000].iter() {
        let value = history(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| encode(black_box(value)))
        });
    }

    group.finish();
}

fn benchmark_decode_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_history");

    for size in [10, 100, 1000].iter() {
        let text = encode(&history(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| decode(black_box(text)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode_simple,
    benchmark_decode_simple,
    benchmark_encode_history,
    benchmark_decode_history
);
criterion_main!(benches);
