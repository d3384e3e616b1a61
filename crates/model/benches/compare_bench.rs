//! Benchmarks for folio-model using criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use folio_model::{GeoPoint, MapValue, Timestamp, Value};

/// Builds a deterministic mix of every value kind.
fn mixed_values(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| match i % 8 {
            0 => Value::Integer(i as i64 * 37 % 1000),
            1 => Value::Double(i as f64 * 0.37),
            2 => Value::from(format!("key-{}", i % 100)),
            3 => Value::Timestamp(Timestamp::new(i as i64 % 500, 0)),
            4 => Value::from(vec![i as u8, (i / 2) as u8]),
            5 => Value::GeoPoint(GeoPoint::new((i % 90) as f64, (i % 180) as f64)),
            6 => Value::boolean(i % 2 == 0),
            _ => Value::NULL,
        })
        .collect()
}

/// Builds a value tree of the given depth with a few entries per level.
fn deep_value(depth: usize) -> Value {
    if depth == 0 {
        return Value::Integer(42);
    }
    let mut map = MapValue::new();
    map.insert("child".into(), deep_value(depth - 1));
    map.insert("name".into(), Value::from("node"));
    Value::from(vec![Value::from(map), Value::Integer(depth as i64)])
}

fn sort_mixed_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_mixed");

    for size in [100, 1000, 10000].iter() {
        let values = mixed_values(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut v = values.clone();
                v.sort_unstable();
                black_box(v)
            });
        });
    }

    group.finish();
}

fn compare_deep_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_deep");

    for depth in [4, 16, 64].iter() {
        let a = deep_value(*depth);
        let b = deep_value(*depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |bench, _| {
            bench.iter(|| black_box(a.cmp(&b)));
        });
    }

    group.finish();
}

fn compare_numeric_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_numeric");

    let integers: Vec<Value> = (0..1000).map(|i| Value::Integer(i * 3)).collect();
    let doubles: Vec<Value> = (0..1000).map(|i| Value::Double(i as f64 * 1.5)).collect();

    group.bench_function("integer_vs_double", |b| {
        b.iter(|| {
            for (x, y) in integers.iter().zip(doubles.iter()) {
                black_box(x.cmp(y));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    sort_mixed_benchmark,
    compare_deep_benchmark,
    compare_numeric_benchmark
);
criterion_main!(benches);
