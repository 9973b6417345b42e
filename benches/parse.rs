use criterion::{criterion_group, criterion_main, Criterion, black_box};

use fixture_scrape::fixtures::{FixtureTable, ScrapePayload};

fn sample_payload(n: usize) -> String {
    let fixture = r#"{"date":"2023-08-12","round":"1","home":"Alpha United","away":"Beta City","score":"2-1","venue":"Riverside Stadium"}"#;
    let fixtures = std::iter::repeat(fixture).take(n).collect::<Vec<_>>().join(",");
    format!(r#"{{"season":"2023-2024","fixtures":[{fixtures}]}}"#)
}

fn bench_parse(c: &mut Criterion) {
    let doc = sample_payload(380); // a full league season

    c.bench_function("decode_payload", |b| {
        b.iter(|| {
            let payload: ScrapePayload = serde_json::from_str(black_box(&doc)).unwrap();
            black_box(payload.fixtures.len())
        })
    });

    c.bench_function("build_table", |b| {
        let payload: ScrapePayload = serde_json::from_str(&doc).unwrap();
        b.iter(|| {
            let table = FixtureTable::from_fixtures(black_box(&payload.fixtures));
            black_box(table.rows.len())
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
