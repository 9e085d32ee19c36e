//! Knowledge-based deduction engine for Minesweeper.
//!
//! The engine reasons about the board with counting constraints. Every
//! revealed cell contributes a [`Sentence`] — "exactly N of these cells are
//! mines" — over its still-unknown neighbors. The [`KnowledgeBase`] holds
//! every sentence learned so far and drives them to a fixed point after
//! each observation:
//!
//! - a sentence whose count is zero proves all of its cells safe;
//! - a sentence whose count equals its cell count proves them all mines;
//! - when one sentence's cells are a subset of another's, their difference
//!   is itself a sentence (subset resolution).
//!
//! The [`Agent`] owns the knowledge base together with the global
//! classification sets and exposes the move policy: a proven-safe move when
//! one exists, a uniformly random fallback otherwise. Every classification
//! is a sound consequence of the observations; the agent never guesses a
//! cell into a classification set.
//!
//! # Examples
//!
//! ```
//! use mineswept_core::{Cell, GridSize};
//! use mineswept_solver::Agent;
//!
//! let mut agent = Agent::new(GridSize::new(3, 3));
//! agent.add_knowledge(Cell::new(0, 0), 0);
//!
//! // A zero count proves every neighbor safe.
//! assert!(agent.known_safes().contains(Cell::new(1, 1)));
//! ```

pub mod agent;
pub mod knowledge;
pub mod sentence;

pub use self::{
    agent::Agent,
    knowledge::{Classification, KnowledgeBase},
    sentence::Sentence,
};
