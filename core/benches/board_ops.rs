use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use gridmine_core::{Board, GameConfig, LayoutGenerator, RandomLayoutGenerator};

fn bench_generate(c: &mut Criterion) {
    let config = GameConfig::new(300, 300, 13500).unwrap();

    c.bench_function("generate_300x300", |b| {
        b.iter(|| RandomLayoutGenerator::new(black_box(42)).generate(config))
    });
}

fn bench_flood_reveal(c: &mut Criterion) {
    let config = GameConfig::new(300, 300, 0).unwrap();

    c.bench_function("flood_reveal_full_300x300", |b| {
        b.iter_batched(
            || Board::generate(config, 7),
            |mut board| board.reveal(black_box((0, 0))).unwrap(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_generate, bench_flood_reveal);
criterion_main!(benches);
