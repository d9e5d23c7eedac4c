//! Sequence equality benchmarks, one group per tier.
//!
//! Compares equal inputs of growing length so every element is visited.

use std::collections::VecDeque;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use equate_seq::{sequence_equal, Sequence};

fn make_block(len: usize) -> Vec<u64> {
    (0..len as u64).map(|n| n.wrapping_mul(0x9E37_79B9)).collect()
}

/// Two contiguous slices of a bitwise type: one memcmp.
fn bench_bitwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_equal/bitwise");

    for len in [16, 256, 4096, 65536] {
        let first = make_block(len);
        let second = first.clone();

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| {
                black_box(sequence_equal(
                    Some(Sequence::from(black_box(&first))),
                    Some(Sequence::from(black_box(&second))),
                ))
            });
        });
    }

    group.finish();
}

/// A slice against a deque: length check, then element by element.
fn bench_indexed(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_equal/indexed");

    for len in [16, 256, 4096, 65536] {
        let first = make_block(len);
        let second: VecDeque<u64> = first.iter().copied().collect();

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| {
                black_box(sequence_equal(
                    Some(Sequence::from(black_box(&first))),
                    Some(Sequence::from(black_box(&second))),
                ))
            });
        });
    }

    group.finish();
}

/// Two uncounted streams: lockstep iteration.
fn bench_iterator(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_equal/iterator");

    for len in [16, 256, 4096, 65536] {
        let first = make_block(len);
        let second = first.clone();

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| {
                black_box(sequence_equal(
                    Some(Sequence::stream_ref(black_box(&first).iter())),
                    Some(Sequence::stream_ref(black_box(&second).iter())),
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bitwise, bench_indexed, bench_iterator);
criterion_main!(benches);
