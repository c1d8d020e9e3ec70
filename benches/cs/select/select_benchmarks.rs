use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nth_smallest::{select_heap, select_partition};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn inputs(size: usize) -> Vec<(&'static str, Vec<i32>)> {
    let mut rng = ChaCha8Rng::seed_from_u64(size as u64);
    vec![
        ("random", (0..size).map(|_| rng.gen()).collect()),
        ("ascending", (0..size as i32).collect()),
        ("descending", (0..size as i32).rev().collect()),
    ]
}

fn bench_select(c: &mut Criterion) {
    for size in [100usize, 1_000, 10_000] {
        for (shape, data) in inputs(size) {
            let mut group = c.benchmark_group(format!("select_{}_{}", shape, size));
            for n in [1, size / 10, size / 2] {
                let n = n.max(1);
                group.bench_with_input(BenchmarkId::new("partition", n), &n, |b, &n| {
                    b.iter(|| select_partition(black_box(&data), n))
                });
                group.bench_with_input(BenchmarkId::new("heap", n), &n, |b, &n| {
                    b.iter(|| select_heap(black_box(&data), n))
                });
                group.bench_with_input(BenchmarkId::new("std_select_nth", n), &n, |b, &n| {
                    b.iter(|| {
                        let mut work = black_box(&data).clone();
                        *work.select_nth_unstable(n - 1).1
                    })
                });
            }
            group.finish();
        }
    }
}

criterion_group!(benches, bench_select);
criterion_main!(benches);
