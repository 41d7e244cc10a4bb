// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use const_str::concat as strcat;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group};

// local imports
use super::super::{ND, hash, samples::PATTERNS};

criterion_group!(benches, bench);

const GROUP: &str = strcat!(super::super::GROUP, ND, "detect");

fn bench(c: &mut Criterion) {
    let mut c = c.benchmark_group(GROUP);
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    for (name, input, expected) in PATTERNS {
        assert_eq!(extglob::is_extglob(input), *expected);

        let param = format!(
            "{}:{}:{}:{}",
            name,
            if *expected { "pos" } else { "neg" },
            input.len(),
            hash(input)
        );

        c.throughput(Throughput::Bytes(input.len() as u64));
        c.bench_function(BenchmarkId::new("is-extglob", param), |b| {
            b.iter(|| extglob::is_extglob(black_box(input)));
        });
    }

    c.throughput(Throughput::Elements(PATTERNS.len() as u64));
    c.bench_function(BenchmarkId::new("is-extglob", "all"), |b| {
        b.iter(|| {
            for (_, input, _) in PATTERNS {
                black_box(extglob::is_extglob(black_box(input)));
            }
        });
    });
}
