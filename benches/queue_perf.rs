use std::collections::BinaryHeap;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use fib_priority_queue::FibPriorityQueue;

fn shuffled_values(size: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..size).map(|_| rng.random_range(0..size.max(1))).collect()
}

fn bench_enqueue(c: &mut Criterion) {
    let mut group = c.benchmark_group("enqueue");
    for &size in &[100u64, 1_000, 10_000, 100_000] {
        let values = shuffled_values(size);
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(
            BenchmarkId::new("FibPriorityQueue", size),
            &values,
            |b, values| {
                b.iter(|| {
                    let mut queue = FibPriorityQueue::max_queue();
                    for &value in values {
                        queue.enqueue(black_box(value));
                    }
                    queue
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("BinaryHeap", size),
            &values,
            |b, values| {
                b.iter(|| {
                    let mut heap = BinaryHeap::new();
                    for &value in values {
                        heap.push(black_box(value));
                    }
                    heap
                });
            },
        );
    }
    group.finish();
}

fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("drain");
    for &size in &[100u64, 1_000, 10_000] {
        let values = shuffled_values(size);
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(
            BenchmarkId::new("FibPriorityQueue", size),
            &values,
            |b, values| {
                b.iter(|| {
                    let mut queue = FibPriorityQueue::max_queue();
                    for &value in values {
                        queue.enqueue(value);
                    }
                    while let Ok(value) = queue.dequeue() {
                        black_box(value);
                    }
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("BinaryHeap", size),
            &values,
            |b, values| {
                b.iter(|| {
                    let mut heap = BinaryHeap::new();
                    for &value in values {
                        heap.push(value);
                    }
                    while let Some(value) = heap.pop() {
                        black_box(value);
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_enqueue_dequeue_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_workload");
    for &size in &[1_000u64, 10_000] {
        let values = shuffled_values(size);
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(
            BenchmarkId::new("FibPriorityQueue", size),
            &values,
            |b, values| {
                b.iter(|| {
                    let mut queue = FibPriorityQueue::max_queue();
                    for chunk in values.chunks(4) {
                        for &value in chunk {
                            queue.enqueue(value);
                        }
                        let _ = queue.dequeue();
                    }
                    queue
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_enqueue, bench_drain, bench_enqueue_dequeue_mix);
criterion_main!(benches);
