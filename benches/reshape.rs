use chrono::{DateTime, Utc};
use commitviz::{reshape, Commit};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn synthetic_commits(count: usize, authors: usize) -> Vec<Commit> {
    let base = 1_388_534_400i64;
    (0..count)
        .map(|i| {
            let ts: DateTime<Utc> = DateTime::from_timestamp(base + (i as i64 * 7_919) % (90 * 86_400), 0)
                .unwrap_or_default();
            Commit::new(format!("author-{}", i % authors), ts)
        })
        .collect()
}

fn bench_reshape(c: &mut Criterion) {
    let mut group = c.benchmark_group("reshape");
    for &count in &[30usize, 300, 3_000] {
        let commits = synthetic_commits(count, 12);
        group.bench_with_input(BenchmarkId::from_parameter(count), &commits, |b, commits| {
            b.iter(|| reshape(black_box(commits)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reshape);
criterion_main!(benches);
