use categorizer::{Category, categorize};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_first_rule_hit(c: &mut Criterion) {
    c.bench_function("categorizer/first_rule_hit", |b| {
        b.iter(|| categorize(black_box("grocery store purchase")));
    });
}

fn bench_last_rule_hit(c: &mut Criterion) {
    c.bench_function("categorizer/last_rule_hit", |b| {
        b.iter(|| categorize(black_box("direct deposit payroll")));
    });
}

fn bench_fallback_full_scan(c: &mut Criterion) {
    c.bench_function("categorizer/fallback_full_scan", |b| {
        b.iter(|| {
            let result = categorize(black_box("xyz123 unrelated merchant"));
            assert_eq!(result.category, Category::Other);
        });
    });
}

fn bench_long_description(c: &mut Criterion) {
    let description = "payment reference 0000123456 to merchant ".repeat(20) + "cafe";

    c.bench_function("categorizer/long_description", |b| {
        b.iter(|| categorize(black_box(description.as_str())));
    });
}

criterion_group!(
    benches,
    bench_first_rule_hit,
    bench_last_rule_hit,
    bench_fallback_full_scan,
    bench_long_description,
);
criterion_main!(benches);
