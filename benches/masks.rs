use criterion::{criterion_group, criterion_main, Criterion};

use lanemask::{range_mask, strided_mask, PermuteMask};

fn strided_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("strided");
    for repeat in [1, 2, 8, 32] {
        group.bench_function(format!("every {}", repeat), |b| {
            b.iter(|| strided_mask(0, repeat).map(|bits| bits.to_hex()))
        });
    }
    group.finish();
}

fn range_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("range");
    for width in [8, 64, 128, 512] {
        group.bench_function(format!("width {}", width), |b| {
            b.iter(|| range_mask(width / 4, width / 2, width).map(|bits| bits.to_hex()))
        });
    }
    group.finish();
}

fn permute_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("permute");
    for mask in PermuteMask::ALL {
        group.bench_function(mask.to_string(), |b| b.iter(|| mask.bits().to_hex()));
    }
    group.finish();
}

criterion_group!(benches, strided_bench, range_bench, permute_bench);
criterion_main!(benches);
