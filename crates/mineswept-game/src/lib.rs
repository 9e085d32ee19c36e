//! Minesweeper game layer: ground-truth board and agent-driven sessions.
//!
//! This crate owns everything the deduction engine must not see. The
//! [`Board`] knows where the mines actually are and answers local count
//! queries; the [`Game`] session reveals cells, forwards the observations
//! to the agent, flags the mines it proves, and tracks the win/loss state.
//!
//! Randomness — mine placement and the agent's fallback move — comes from
//! an [`rand::Rng`] supplied by the caller, so a seeded generator makes an
//! entire game reproducible.
//!
//! # Examples
//!
//! ```
//! use mineswept_core::GridSize;
//! use mineswept_game::{Board, Game};
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg64Mcg;
//!
//! let mut rng = Pcg64Mcg::seed_from_u64(1);
//! let board = Board::generate(GridSize::new(8, 8), 8, &mut rng)?;
//! let mut game = Game::new(board);
//! let state = game.play(&mut rng);
//! println!("{state}");
//! # Ok::<(), mineswept_game::BoardError>(())
//! ```

pub mod board;
pub mod game;

pub use self::{
    board::{Board, BoardError},
    game::{Game, GameError, GameState},
};
