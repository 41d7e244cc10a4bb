// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use const_str::concat as strcat;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group};

// local imports
use super::super::{ND, samples::PATTERNS};
use extglob::{BoundedCache, Cache, Detector, NoCache};

criterion_group!(benches, bench);

const GROUP: &str = strcat!(super::super::GROUP, ND, "detector");

fn bench(c: &mut Criterion) {
    bench_with(c, "bounded", || Detector::new(BoundedCache::default()));
    bench_with(c, "none", || Detector::new(NoCache::default()));
}

fn bench_with<C: Cache>(c: &mut Criterion, title: &str, detector: impl Fn() -> Detector<C>) {
    let mut c = c.benchmark_group(GROUP);
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    let repeated = detector();
    c.throughput(Throughput::Elements(1));
    c.bench_function(BenchmarkId::new(title, "repeated"), |b| {
        b.iter(|| repeated.is_extglob(black_box("?(abc)")));
    });

    let mixed = detector();
    c.throughput(Throughput::Elements(PATTERNS.len() as u64));
    c.bench_function(BenchmarkId::new(title, "all"), |b| {
        b.iter(|| {
            for (_, input, _) in PATTERNS {
                black_box(mixed.is_extglob(black_box(input)));
            }
        });
    });
}
