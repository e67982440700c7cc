//! Benchmarks for respoint processing performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic resumes with a configurable number of
//! experience entries.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use respoint::{Document, PointsPayload};

/// Creates a synthetic resume with the given number of experience entries.
fn create_test_resume(entries: usize) -> Document {
    let mut lines = vec![
        "Jane Doe".to_string(),
        "jane@example.com".to_string(),
        "Professional Experience".to_string(),
    ];

    for i in 0..entries {
        lines.push(format!("Company {} | Jan {} - Dec {}", i + 1, 2000 + i, 2001 + i));
        lines.push("Software Engineer".to_string());
        for j in 0..4 {
            lines.push(format!("• Delivered feature {} for team {}", j + 1, i + 1));
        }
        lines.push(String::new());
    }

    lines.push("Education".to_string());
    lines.push("B.Sc. Computer Science".to_string());

    Document::from_lines(lines.iter().map(String::as_str))
}

fn create_test_points(count: usize) -> PointsPayload {
    PointsPayload::flat(
        (0..count).map(|i| format!("Implemented service {} in Rust", i + 1)),
        ["Rust", "Kafka", "PostgreSQL"],
    )
}

/// Benchmark project detection at various sizes.
fn bench_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detection");

    for entries in [3, 10, 50].iter() {
        let doc = create_test_resume(*entries);

        group.bench_function(format!("{}_entries", entries), |b| {
            b.iter(|| respoint::find_projects(black_box(&doc)));
        });
    }

    group.finish();
}

/// Benchmark point distribution.
fn bench_distribution(c: &mut Criterion) {
    let projects = respoint::find_projects(&create_test_resume(5));
    let points = create_test_points(30);

    c.bench_function("distribute_30_points", |b| {
        b.iter(|| respoint::distribute(black_box(&projects), black_box(&points)));
    });
}

/// Benchmark full processing of a synthetic resume.
fn bench_processing(c: &mut Criterion) {
    let doc = create_test_resume(5);
    let points = create_test_points(12);

    c.bench_function("process_resume", |b| {
        b.iter(|| {
            let mut doc = doc.clone();
            let _ = respoint::process(black_box(&mut doc), black_box(&points));
        });
    });
}

criterion_group!(benches, bench_detection, bench_distribution, bench_processing);
criterion_main!(benches);
