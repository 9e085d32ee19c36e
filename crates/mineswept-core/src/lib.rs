//! Core data structures for the Mineswept engine.
//!
//! This crate provides the fundamental value types shared by the deduction
//! agent and the game layer:
//!
//! - [`Cell`]: a typed board coordinate with value equality and hashing
//! - [`GridSize`]: board dimensions, bounds checks, and the in-bounds
//!   eight-cell neighborhood
//! - [`CellSet`]: an ordered set of cells with subset testing and set
//!   difference, the carrier type for counting constraints
//!
//! # Examples
//!
//! ```
//! use mineswept_core::{Cell, CellSet, GridSize};
//!
//! let size = GridSize::new(8, 8);
//! let frontier: CellSet = size.neighbors(Cell::new(0, 0)).collect();
//! assert_eq!(frontier.len(), 3);
//! assert!(frontier.contains(Cell::new(1, 1)));
//! ```

pub mod cell;
pub mod cell_set;

pub use self::{
    cell::{Cell, GridSize},
    cell_set::CellSet,
};
