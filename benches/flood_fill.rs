use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use minegrid::{Difficulty, Grid};

fn flood_fill(c: &mut Criterion) {
    // Worst case: every cell is zero-adjacency, one uncover sweeps the
    // whole board through the work list.
    c.bench_function("uncover_256x256_empty", |b| {
        b.iter_batched(
            || Grid::from_mine_coords((256, 256), &[]).unwrap(),
            |mut grid| grid.uncover((0, 0)),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("uncover_expert_first_click", |b| {
        b.iter_batched(
            || Grid::generate(Difficulty::Expert.config(), (0, 0), 42),
            |mut grid| grid.uncover((0, 0)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, flood_fill);
criterion_main!(benches);
