//! Benchmarks for agent-driven Minesweeper games.
//!
//! Measures a complete session — board generation, every closure pass, and
//! move selection — on two standard layouts:
//!
//! - **`autoplay_beginner`**: 9x9 board with 10 mines.
//! - **`autoplay_intermediate`**: 16x16 board with 40 mines.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while covering several
//! mine layouts and random-fallback paths:
//!
//! - **`seed_0`**: `0xc1d4_4bd6_afaf_8af6`
//! - **`seed_1`**: `0xa2b3_c4d5_e6f7_a8b9`
//! - **`seed_2`**: `0x1234_5678_90ab_cdef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench autoplay
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use mineswept_core::GridSize;
use mineswept_game::{Board, Game};
use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;

const SEEDS: [u64; 3] = [0xc1d4_4bd6_afaf_8af6, 0xa2b3_c4d5_e6f7_a8b9, 0x1234_5678_90ab_cdef];

fn play_seeded(seed: u64, size: GridSize, mines: usize) {
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let board = Board::generate(size, mines, &mut rng).unwrap();
    let mut game = Game::new(board);
    let _ = hint::black_box(game.play(&mut rng));
}

fn bench_autoplay_beginner(c: &mut Criterion) {
    let size = GridSize::new(9, 9);
    for (i, seed) in SEEDS.into_iter().enumerate() {
        c.bench_with_input(
            BenchmarkId::new("autoplay_beginner", format!("seed_{i}")),
            &seed,
            |b, &seed| {
                b.iter_batched(
                    || hint::black_box(seed),
                    |seed| play_seeded(seed, size, 10),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_autoplay_intermediate(c: &mut Criterion) {
    let size = GridSize::new(16, 16);
    for (i, seed) in SEEDS.into_iter().enumerate() {
        c.bench_with_input(
            BenchmarkId::new("autoplay_intermediate", format!("seed_{i}")),
            &seed,
            |b, &seed| {
                b.iter_batched(
                    || hint::black_box(seed),
                    |seed| play_seeded(seed, size, 40),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(benches, bench_autoplay_beginner, bench_autoplay_intermediate);
criterion_main!(benches);
