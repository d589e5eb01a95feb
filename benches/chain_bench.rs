//! Benchmark for the cycle detectors and deduplication.
//!
//! Compares the faithful quadratic cycle scan against the Floyd
//! tortoise-and-hare detector, and measures deduplication across chain
//! sizes.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use relink::chain::{ChainArena, NodeId, detect_cycle, detect_cycle_floyd, remove_duplicates};
use std::hint::black_box;

/// Builds a chain of `size` nodes whose tail links back to the node at
/// `entry_index`.
fn cyclic_chain(size: usize, entry_index: usize) -> (ChainArena<usize>, NodeId) {
    let mut arena = ChainArena::with_capacity(size);
    let head = arena.chain_from_iter(0..size).expect("non-empty chain");
    let entry = arena.iter(head).nth(entry_index).expect("entry in range");
    let tail = arena.iter(head).last().expect("tail");
    arena.set_next(tail, Some(entry));
    (arena, head)
}

// =============================================================================
// Cycle Detection Benchmark
// =============================================================================

fn benchmark_cycle_detection(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cycle_detection");

    for size in [100, 1000] {
        let (arena, head) = cyclic_chain(size, size / 2);

        // Quadratic nested scan (O(n^2))
        group.bench_with_input(BenchmarkId::new("nested_scan", size), &size, |bencher, _| {
            bencher.iter(|| detect_cycle(black_box(&arena), black_box(head)));
        });

        // Floyd tortoise and hare (O(n))
        group.bench_with_input(BenchmarkId::new("floyd", size), &size, |bencher, _| {
            bencher.iter(|| detect_cycle_floyd(black_box(&arena), black_box(head)));
        });
    }

    group.finish();
}

// =============================================================================
// Deduplication Benchmark
// =============================================================================

fn benchmark_remove_duplicates(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove_duplicates");

    for size in [100, 1000] {
        group.bench_with_input(BenchmarkId::new("dense_duplicates", size), &size, |bencher, &size| {
            bencher.iter(|| {
                // Rebuild per iteration: deduplication consumes the chain.
                let mut arena = ChainArena::with_capacity(size);
                let head = arena
                    .chain_from_iter((0..size).map(|index| index % 10))
                    .expect("non-empty chain");
                black_box(remove_duplicates(&mut arena, head))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_cycle_detection,
    benchmark_remove_duplicates
);
criterion_main!(benches);
