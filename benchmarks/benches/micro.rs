use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use redo_benchmarks::descending_cost_arena;
use redo_search::frontier::Frontier;
use redo_search::prune::prune;
use redo_search::{NodeArena, Strategy};

// ---------------------------------------------------------------------------
// Frontier merge/sort/pop
// ---------------------------------------------------------------------------

fn bench_frontier(c: &mut Criterion) {
    let mut group = c.benchmark_group("frontier_merge_sort_pop");
    for &size in &[10u64, 100, 500] {
        let (arena, ids) = descending_cost_arena(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter_batched(
                Frontier::new,
                |mut frontier| {
                    frontier.merge(&ids);
                    frontier.sort(&arena, Strategy::UniformCost);
                    while let Some(id) = frontier.pop_best() {
                        black_box(id);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Dominance pruning: every new candidate supersedes a frontier node
// ---------------------------------------------------------------------------

fn bench_prune_supersession(c: &mut Criterion) {
    let mut group = c.benchmark_group("prune_full_supersession");
    for &size in &[10u64, 100, 500] {
        // Old nodes cost 2, challengers for the same states cost 1.
        let mut arena = NodeArena::new();
        let old: Vec<u64> = (0..size).map(|i| arena.create(i, None, 2.0, None)).collect();
        let new: Vec<u64> = (0..size).map(|i| arena.create(i, None, 1.0, None)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter_batched(
                || {
                    let mut frontier = Frontier::new();
                    frontier.merge(&old);
                    frontier
                },
                |mut frontier| {
                    let mut explored = Vec::new();
                    black_box(prune(
                        &arena,
                        Strategy::UniformCost,
                        &new,
                        &mut frontier,
                        &mut explored,
                    ))
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Dominance pruning: every new candidate is dominated and discarded
// ---------------------------------------------------------------------------

fn bench_prune_rejection(c: &mut Criterion) {
    let mut group = c.benchmark_group("prune_full_rejection");
    for &size in &[10u64, 100, 500] {
        let mut arena = NodeArena::new();
        let old: Vec<u64> = (0..size).map(|i| arena.create(i, None, 1.0, None)).collect();
        let new: Vec<u64> = (0..size).map(|i| arena.create(i, None, 2.0, None)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter_batched(
                || {
                    let mut frontier = Frontier::new();
                    frontier.merge(&old);
                    frontier
                },
                |mut frontier| {
                    let mut explored = Vec::new();
                    black_box(prune(
                        &arena,
                        Strategy::UniformCost,
                        &new,
                        &mut frontier,
                        &mut explored,
                    ))
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_frontier,
    bench_prune_supersession,
    bench_prune_rejection
);
criterion_main!(benches);
