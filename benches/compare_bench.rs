//! Buffer capacity sweep for the comparison engine
//!
//! Measures a full two-way comparison of identical inputs (the worst case:
//! every byte of both streams has to be read) across buffer capacities.

use cmpy::{Session, Source};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fs;
use tempfile::TempDir;

fn bench_buffer_capacities(c: &mut Criterion) {
    let dir = TempDir::new().expect("create bench tempdir");
    let payload = vec![0xA5u8; 4 * 1024 * 1024];

    let left = dir.path().join("left.bin");
    let right = dir.path().join("right.bin");
    fs::write(&left, &payload).expect("write left input");
    fs::write(&right, &payload).expect("write right input");

    let identities = vec![
        left.to_string_lossy().into_owned(),
        right.to_string_lossy().into_owned(),
    ];

    let mut group = c.benchmark_group("identical_pair");
    group.throughput(Throughput::Bytes(2 * payload.len() as u64));

    for capacity in [4096usize, 16384, 65536, 262144] {
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &capacity,
            |b, &capacity| {
                b.iter(|| {
                    let sources = Source::open_all(&identities).expect("open bench inputs");
                    let mut session =
                        Session::build(sources, capacity).expect("build bench session");
                    session.run().expect("run bench session")
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_buffer_capacities);
criterion_main!(benches);
