//! Per-step translation cost of every dispatch variant under criterion.
//!
//! Each benchmark translates a 100-shape collection by one offset per
//! iteration; offsets come from the same seeded stream for every variant.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dispatch_bench::config::SHAPE_COUNT;
use dispatch_bench::registry::build_registry;
use dispatch_bench::workload::Workload;
use std::hint::black_box;
use std::time::Duration;

criterion_group!(
    name = bench_dispatch;
    config = Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_millis(2000))
        .warm_up_time(Duration::from_millis(500));
    targets = bench_translate_step,
);
criterion_main!(bench_dispatch);

fn bench_translate_step(c: &mut Criterion) {
    let registry = build_registry();
    let workload = Workload::new(SHAPE_COUNT, 0, 0x5eed);

    for suite in registry.all() {
        let mut group = c.benchmark_group(suite.name());
        group.throughput(Throughput::Elements(SHAPE_COUNT as u64));

        for variant in suite.variants() {
            group.bench_function(BenchmarkId::from_parameter(variant.name), |b| {
                let (recipes, mut offsets) = workload.replay();
                let mut shapes = (variant.function)(&recipes);
                b.iter(|| shapes.translate(black_box(&offsets.next_offset())));
            });
        }

        group.finish();
    }
}
