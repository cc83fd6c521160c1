use astral::aspects::{angular_separation, AspectDetector};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_angular_separation(c: &mut Criterion) {
    c.bench_function("angular_separation", |b| {
        b.iter(|| angular_separation(black_box(358.0), black_box(2.0)))
    });
}

fn bench_detect_aspects(c: &mut Criterion) {
    let detector = AspectDetector::new();

    let bodies: Vec<(String, f64)> = (0..13)
        .map(|i| (format!("planet_{}", i), (i as f64) * 29.5))
        .collect();

    c.bench_function("detect_aspects_13_bodies", |b| {
        b.iter(|| detector.detect(black_box(bodies.as_slice())))
    });
}

criterion_group!(benches, bench_angular_separation, bench_detect_aspects);
criterion_main!(benches);
