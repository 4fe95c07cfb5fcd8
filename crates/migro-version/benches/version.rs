use criterion::{black_box, criterion_group, criterion_main, Criterion};
use migro_version::VersionValue;

fn bench_parse(c: &mut Criterion) {
    let versions = [
        "1.2.3.4",
        "18.0.4.201",
        "3.x",
        "10.1.x",
        "2",
        "0.120.3.45123",
        "3.291.5.x",
        "7.0.0",
    ];

    c.bench_function("parse_versions", |b| {
        b.iter(|| {
            for version in versions {
                black_box(VersionValue::parse(black_box(version)).ok());
            }
        })
    });
}

fn bench_compare(c: &mut Criterion) {
    let pairs: Vec<(VersionValue, VersionValue)> = [
        ("1.2.3.4", "1.2.3.5"),
        ("1.2.x", "1.2.3"),
        ("2.1.0.0", "1.5.0.0"),
        ("1.x.x.x", "1.5.6.7"),
        ("10.5.2.1", "10.5.2.100"),
    ]
    .iter()
    .map(|(a, b)| {
        (
            VersionValue::parse(a).expect("parse lhs"),
            VersionValue::parse(b).expect("parse rhs"),
        )
    })
    .collect();

    c.bench_function("compare_versions", |b| {
        b.iter(|| {
            for (lhs, rhs) in &pairs {
                black_box(lhs.compare(rhs));
            }
        })
    });
}

fn bench_sort(c: &mut Criterion) {
    let versions: Vec<VersionValue> = [
        "2.1.0.0", "1.5.0.0", "1.2.0.0", "2.0.0.0", "1.2.1.0", "1.2.0.1", "0.9.0.0", "3.0.0.0",
    ]
    .iter()
    .map(|text| VersionValue::parse(text).expect("parse version"))
    .collect();

    c.bench_function("sort_versions", |b| {
        b.iter(|| {
            let mut sorted = versions.clone();
            sorted.sort_by(|a, b| a.compare(b));
            black_box(sorted);
        })
    });
}

criterion_group!(benches, bench_parse, bench_compare, bench_sort);
criterion_main!(benches);
