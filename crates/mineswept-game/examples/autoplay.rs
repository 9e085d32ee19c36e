//! Example playing batches of Minesweeper with the deduction agent.
//!
//! Each game generates a fresh board, then alternates proven-safe moves
//! with random fallbacks until the agent flags every mine or reveals one.
//! The seed is printed so any batch can be reproduced exactly.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example autoplay
//! ```
//!
//! Play the classic beginner setup, 1000 games:
//!
//! ```sh
//! cargo run --example autoplay -- --height 9 --width 9 --mines 10 --games 1000
//! ```
//!
//! Reproduce a previous batch:
//!
//! ```sh
//! cargo run --example autoplay -- --seed 17923868956119824380
//! ```
//!
//! Trace the agent's reasoning on a single game:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example autoplay -- --games 1
//! ```

use std::process;

use clap::Parser;
use mineswept_core::GridSize;
use mineswept_game::{Board, Game, GameState};
use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board height in cells.
    #[arg(long, value_name = "ROWS", default_value_t = 8)]
    height: u8,

    /// Board width in cells.
    #[arg(long, value_name = "COLS", default_value_t = 8)]
    width: u8,

    /// Number of mines per board.
    #[arg(long, value_name = "COUNT", default_value_t = 8)]
    mines: usize,

    /// Number of games to play.
    #[arg(long, value_name = "COUNT", default_value_t = 100)]
    games: u32,

    /// Seed for the random number generator (random if omitted).
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.height == 0 || args.width == 0 || args.games == 0 {
        eprintln!("--height, --width, and --games must be at least 1.");
        process::exit(1);
    }

    let size = GridSize::new(args.height, args.width);
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = Pcg64Mcg::seed_from_u64(seed);

    let mut won = 0_u32;
    let mut safe_reveals = 0_usize;
    for _ in 0..args.games {
        let board = match Board::generate(size, args.mines, &mut rng) {
            Ok(board) => board,
            Err(err) => {
                eprintln!("{err}");
                process::exit(2);
            }
        };
        let mut game = Game::new(board);
        let state = game.play(&mut rng);
        safe_reveals += game.agent().moves_made().len();
        if state == GameState::Won {
            won += 1;
        }
    }

    let percent = f64::from(won) / f64::from(args.games) * 100.0;
    println!(
        "{size} board, {} mines: won {won} of {} games ({percent:.1}%)",
        args.mines, args.games
    );
    println!(
        "average cells revealed per game: {:.1}",
        sum_as_f64(safe_reveals) / f64::from(args.games)
    );
    println!("seed: {seed}");
}

#[expect(clippy::cast_precision_loss)]
fn sum_as_f64(total: usize) -> f64 {
    total as f64
}
