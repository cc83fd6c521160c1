use astral::birth::BirthDetails;
use astral::chart::{ChartAssembler, MockChartGenerator, ProviderFeed};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

fn sample_feed() -> ProviderFeed {
    let names = [
        "Sun", "Moon", "Mars", "Mercury", "Jupiter", "Venus", "Saturn", "Rahu", "Ketu", "Uranus",
        "Neptune", "Pluto", "Ascendant",
    ];
    let mut entries = serde_json::Map::new();
    for (i, name) in names.iter().enumerate() {
        entries.insert(
            i.to_string(),
            json!({
                "name": name,
                "fullDegree": (i as f64 * 37.3) % 360.0,
                "speed": 1.0,
                "isRetro": "false",
                "current_sign": i % 12,
                "house_number": 0
            }),
        );
    }
    entries.insert("13".to_string(), json!({ "name": "ayanamsha", "fullDegree": 24.0 }));
    ProviderFeed::from_value(&serde_json::Value::Object(entries)).unwrap_or_default()
}

fn bench_assemble(c: &mut Criterion) {
    let assembler = ChartAssembler::new();
    let feed = sample_feed();
    let birth = BirthDetails::new(1990, 7, 14, 8, 30, 0, 40.71, -74.0, -4.0);

    c.bench_function("assemble_chart", |b| {
        b.iter(|| assembler.assemble(black_box(&feed), black_box(&birth)))
    });
}

fn bench_mock(c: &mut Criterion) {
    let generator = MockChartGenerator::new();
    let birth = BirthDetails::new(1990, 7, 14, 8, 30, 0, 40.71, -74.0, -4.0);

    c.bench_function("mock_chart", |b| b.iter(|| generator.generate(black_box(&birth))));
}

fn bench_parse_feed(c: &mut Criterion) {
    let raw = json!({
        "0": { "name": "Sun", "fullDegree": 112.4, "isRetro": false, "current_sign": 3 },
        "1": { "name": "Moon", "fullDegree": 280.1, "isRetro": "false", "current_sign": 9 },
        "12": { "name": "Ascendant", "fullDegree": 15.0, "current_sign": 0 },
        "13": { "name": "ayanamsha", "fullDegree": 24.0 }
    })
    .to_string();

    c.bench_function("parse_feed", |b| b.iter(|| ProviderFeed::from_json(black_box(&raw))));
}

criterion_group!(benches, bench_assemble, bench_mock, bench_parse_feed);
criterion_main!(benches);
