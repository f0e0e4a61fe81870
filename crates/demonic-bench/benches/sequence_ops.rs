//! Criterion micro-benchmarks for sequence append, shifting and copying,
//! with `Vec` and `SmallVec` as baselines.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use demonic_array::Sequence;
use demonic_bench::{ascending, with_spare, SIZES};
use smallvec::SmallVec;

/// Benchmark: append `n` values one at a time from empty.
fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");
    for n in SIZES {
        group.bench_with_input(BenchmarkId::new("sequence", n), &n, |b, &n| {
            b.iter(|| {
                let mut seq = Sequence::new();
                for v in 0..n as u64 {
                    seq.push_back(v);
                }
                black_box(seq.len());
            });
        });
        group.bench_with_input(BenchmarkId::new("vec", n), &n, |b, &n| {
            b.iter(|| {
                let mut vec = Vec::new();
                for v in 0..n as u64 {
                    vec.push(v);
                }
                black_box(vec.len());
            });
        });
        group.bench_with_input(BenchmarkId::new("smallvec", n), &n, |b, &n| {
            b.iter(|| {
                let mut vec: SmallVec<[u64; 16]> = SmallVec::new();
                for v in 0..n as u64 {
                    vec.push(v);
                }
                black_box(vec.len());
            });
        });
    }
    group.finish();
}

/// Benchmark: append 64-element chunks.
fn bench_push_back_all(c: &mut Criterion) {
    let chunk: Vec<u64> = (0..64).collect();
    c.bench_function("push_back_all_64x256", |b| {
        b.iter(|| {
            let mut seq = Sequence::new();
            for _ in 0..256 {
                seq.extend_from_slice(&chunk);
            }
            black_box(seq.capacity());
        });
    });
}

/// Benchmark: insert at the front of a sequence with spare capacity, then erase it again.
fn bench_front_insert_erase(c: &mut Criterion) {
    let mut group = c.benchmark_group("front_insert_erase");
    for n in SIZES {
        group.bench_with_input(BenchmarkId::new("sequence", n), &n, |b, &n| {
            let mut seq = with_spare(n, 1);
            b.iter(|| {
                seq.insert(0, black_box(42));
                seq.erase(0);
            });
        });
        group.bench_with_input(BenchmarkId::new("vec", n), &n, |b, &n| {
            let mut vec: Vec<u64> = (0..n as u64).collect();
            vec.reserve(1);
            b.iter(|| {
                vec.insert(0, black_box(42));
                vec.remove(0);
            });
        });
    }
    group.finish();
}

/// Benchmark: deep copy of a sequence with spare capacity.
fn bench_clone(c: &mut Criterion) {
    let seq = with_spare(10_000, 10_000);
    c.bench_function("clone_10k", |b| {
        b.iter(|| {
            let copy = seq.clone();
            black_box(copy.capacity());
        });
    });
}

/// Benchmark: sum through a cursor walk versus slice iteration.
fn bench_traverse(c: &mut Criterion) {
    let seq = ascending(100_000);
    c.bench_function("cursor_walk_100k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            let mut cursor = seq.begin();
            let end = seq.end();
            while cursor != end {
                sum += cursor.get().copied().unwrap_or(0);
                cursor.move_next();
            }
            black_box(sum);
        });
    });
    c.bench_function("slice_iter_100k", |b| {
        b.iter(|| black_box(seq.iter().sum::<u64>()));
    });
}

criterion_group!(
    benches,
    bench_push_back,
    bench_push_back_all,
    bench_front_insert_erase,
    bench_clone,
    bench_traverse
);
criterion_main!(benches);
