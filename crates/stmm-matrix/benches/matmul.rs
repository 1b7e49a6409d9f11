//! Kernel benchmarks across dimensions and loop orders.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stmm_matrix::{MatmulKernel, NaiveKernel, RowMajorKernel};

fn fill(dim: usize) -> Vec<i32> {
    (0..dim * dim).map(|i| (i % 3) as i32).collect()
}

fn bench_kernels(crit: &mut Criterion) {
    let mut group = crit.benchmark_group("matmul");
    for dim in [8, 32, 128] {
        let a = fill(dim);
        let b = fill(dim);

        for kernel in [&NaiveKernel as &dyn MatmulKernel, &RowMajorKernel] {
            group.bench_with_input(
                BenchmarkId::new(kernel.name(), dim),
                &dim,
                |bencher, &dim| {
                    let mut c = vec![0i32; dim * dim];
                    bencher.iter(|| {
                        kernel.matmul(dim, black_box(&a), black_box(&b), &mut c);
                        black_box(&c);
                    });
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_kernels);
criterion_main!(benches);
