use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nextword::{select, select_linear, Cdf};
use std::hint::black_box;

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("cdf_select");
    for &n in &[8usize, 256, 4096] {
        // Uniform weights; label i owns the slice ending at (i + 1) / n.
        let cdf = Cdf::from_weights((0..n).map(|i| (i, 1.0))).unwrap();

        // A fixed spread of draws so both variants resolve the same entries.
        let draws: Vec<f64> = (0..64).map(|i| (i as f64 + 0.5) / 64.0).collect();

        group.bench_with_input(BenchmarkId::new("binary", n), &n, |b, _| {
            b.iter(|| {
                for &d in &draws {
                    black_box(select(black_box(&cdf), d).unwrap());
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("linear", n), &n, |b, _| {
            b.iter(|| {
                for &d in &draws {
                    black_box(select_linear(black_box(&cdf), d).unwrap());
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_select);
criterion_main!(benches);
