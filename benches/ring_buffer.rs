//! Benchmarks for the ring-buffer backed Deque and Queue.
//!
//! Run with: `cargo bench --bench ring_buffer`

mod common;

use std::hint::black_box;

use common::workload::{Op, OpMix};
use containerkit::builder::ContainerBuilder;
use containerkit::collections::{Deque, Queue};
use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};

const OPS: usize = 100_000;

fn replay(deque: &mut Deque<u64>, ops: &[Op]) {
    for op in ops {
        match *op {
            Op::PushFront(v) => deque.push_front(v),
            Op::PushBack(v) => deque.push_back(v),
            Op::PopFront => {
                black_box(deque.pop_front());
            },
            Op::PopBack => {
                black_box(deque.pop_back());
            },
        }
    }
}

// ============================================================================
// Mixed churn (both ends)
// ============================================================================

fn bench_deque_churn(c: &mut Criterion) {
    let ops = OpMix::churn(7).ops(OPS);
    let mut group = c.benchmark_group("deque");
    group.throughput(Throughput::Elements(OPS as u64));

    for (name, builder) in [
        ("churn_auto_shrink", ContainerBuilder::new().shrink_threshold(64)),
        ("churn_no_shrink", ContainerBuilder::new().auto_shrink(false)),
    ] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || builder.build_deque::<u64>(),
                |mut deque| replay(&mut deque, &ops),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

// ============================================================================
// Growth-dominated load
// ============================================================================

fn bench_deque_growth(c: &mut Criterion) {
    let ops = OpMix::growth(11).ops(OPS);
    let mut group = c.benchmark_group("deque");
    group.throughput(Throughput::Elements(OPS as u64));

    group.bench_function("growth", |b| {
        b.iter_batched(
            Deque::new,
            |mut deque| replay(&mut deque, &ops),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

// ============================================================================
// FIFO fill/drain cycles (exercises shrink rebuilds)
// ============================================================================

fn bench_queue_fill_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue");
    group.throughput(Throughput::Elements(2 * 16_384));

    group.bench_function("fill_drain_16k", |b| {
        b.iter_batched(
            Queue::<u64>::new,
            |mut queue| {
                for i in 0..16_384u64 {
                    queue.push(black_box(i));
                }
                while let Some(v) = queue.pop() {
                    black_box(v);
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_deque_churn,
    bench_deque_growth,
    bench_queue_fill_drain
);
criterion_main!(benches);
