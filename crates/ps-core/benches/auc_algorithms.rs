//! Criterion benchmarks comparing pairwise and rank-based AUC.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ps_config::AucAlgorithm;
use ps_core::statistic::Auc;
use ps_core::Split;

fn synthetic(n: usize) -> (Vec<f64>, Vec<f64>) {
    let scores = (0..n).map(|i| ((i * 7919) % 1009) as f64 / 1009.0).collect();
    let labels = (0..n).map(|i| if i % 3 == 0 { 1.0 } else { -1.0 }).collect();
    (scores, labels)
}

fn bench_auc(c: &mut Criterion) {
    let mut group = c.benchmark_group("auc");
    for n in [100usize, 1_000, 10_000] {
        let (scores, labels) = synthetic(n);
        let split = Split::new(&scores, &labels).unwrap();
        for algorithm in [AucAlgorithm::Pairwise, AucAlgorithm::Rank] {
            let auc = Auc::default().with_algorithm(algorithm);
            group.bench_with_input(
                BenchmarkId::new(format!("{algorithm:?}").to_lowercase(), n),
                &split,
                |b, split| b.iter(|| auc.auc(black_box(split))),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_auc);
criterion_main!(benches);
