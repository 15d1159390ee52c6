use std::collections::{BTreeSet, HashMap};

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion,
};
use priomap::PriorityMap;

const SIZES: [usize; 3] = [8, 512, 8 << 10];

fn filled(n: usize, value: impl Fn(usize) -> i64) -> PriorityMap<usize, i64> {
    (0..n).map(|i| (i, value(i))).collect()
}

fn insert_zero(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert zero");
    for &n in &SIZES {
        group.bench_with_input(BenchmarkId::new("pmap", n), &n, |b, &n| {
            b.iter_batched(
                PriorityMap::<usize, i64>::new,
                |mut pm| {
                    for i in 0..n {
                        pm.set(black_box(i), 0);
                    }
                    pm
                },
                BatchSize::SmallInput,
            );
        });
        // the same work on a plain ordered set, for scale
        group.bench_with_input(BenchmarkId::new("btree", n), &n, |b, &n| {
            b.iter_batched(
                || (HashMap::<usize, i64>::new(), BTreeSet::<(i64, usize)>::new()),
                |(mut keys, mut set)| {
                    for i in 0..n {
                        keys.insert(black_box(i), 0);
                        set.insert((0, i));
                    }
                    (keys, set)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");
    for &n in &SIZES {
        let pm = filled(n, |i| i as i64);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                for i in 0..n {
                    black_box(pm.get(&i));
                }
            });
        });
    }
    group.finish();
}

fn step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for &n in &SIZES {
        group.bench_with_input(BenchmarkId::new("increment", n), &n, |b, &n| {
            b.iter_batched(
                || filled(n, |_| 0),
                |mut pm| {
                    for i in 0..n {
                        pm.at(i).increment();
                    }
                    pm
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("decrement", n), &n, |b, &n| {
            b.iter_batched(
                || filled(n, |_| 0),
                |mut pm| {
                    for i in 0..n {
                        pm.at(i).decrement();
                    }
                    pm
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn top_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("top pop");
    for &n in &SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || filled(n, |i| i as i64),
                |mut pm| {
                    while !pm.is_empty() {
                        black_box(pm.top().map(|(k, v)| (*k, *v)));
                        black_box(pm.pop());
                    }
                    pm
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, insert_zero, read, step, top_pop);
criterion_main!(benches);
