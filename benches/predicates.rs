use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use isit::{check, registry, Value};

fn bench_pattern_predicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("patterns");
    group.throughput(Throughput::Elements(1));

    let numeric = Value::from("-4821");
    group.bench_function("numeric", |b| {
        b.iter(|| check::is_numeric(black_box(&numeric)));
    });

    let url = Value::from("https://sub.example.com:8080/a/b?x=1&y=2#frag");
    group.bench_function("url", |b| {
        b.iter(|| check::is_url(black_box(&url)));
    });

    let email = Value::from("first.last@sub.domain.org");
    group.bench_function("email", |b| {
        b.iter(|| check::email(black_box(&email)));
    });

    let json = Value::from(r#"{"a": [1, 2, 3], "b": {"c": null}}"#);
    group.bench_function("json", |b| {
        b.iter(|| check::is_json(black_box(&json)));
    });

    group.finish();
}

fn bench_registry_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");
    group.throughput(Throughput::Elements(1));

    let reg = registry();
    let probe = [Value::Int(42)];
    group.bench_function("apply_even", |b| {
        b.iter(|| reg.apply(black_box("even"), black_box(&probe)));
    });

    let range = [Value::Int(5), Value::Int(1), Value::Int(10)];
    group.bench_function("apply_between", |b| {
        b.iter(|| reg.apply(black_box("between"), black_box(&range)));
    });

    group.finish();
}

criterion_group!(benches, bench_pattern_predicates, bench_registry_dispatch);
criterion_main!(benches);
