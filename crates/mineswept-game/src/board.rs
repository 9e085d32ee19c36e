//! Ground-truth board state.

use derive_more::{Display, Error};
use mineswept_core::{Cell, CellSet, GridSize};
use rand::{Rng, seq::SliceRandom as _};

/// Errors from board construction and flagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// More mines were requested than the board has cells.
    #[display("cannot place {requested} mines on a board with {available} cells")]
    TooManyMines {
        /// Requested number of mines.
        requested: usize,
        /// Number of cells on the board.
        available: usize,
    },
    /// A mine was placed outside the board.
    #[display("mine at {cell} is outside the {size} board")]
    MineOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// The board dimensions.
        size: GridSize,
    },
    /// A cell that is not a mine was flagged.
    #[display("cell {cell} is not a mine")]
    NotAMine {
        /// The offending cell.
        cell: Cell,
    },
}

/// The real Minesweeper board: where the mines actually are.
///
/// The mine set is fixed at construction and never changes. The only
/// mutable state is the set of flagged mines, and
/// [`flag_mine`](Self::flag_mine) keeps it a subset of the mine set by
/// rejecting anything else. The agent never reads this type directly; the
/// game loop queries it and forwards only local counts.
///
/// # Examples
///
/// ```
/// use mineswept_core::{Cell, CellSet, GridSize};
/// use mineswept_game::Board;
///
/// let mines: CellSet = [Cell::new(2, 2)].into_iter().collect();
/// let board = Board::with_mines(GridSize::new(3, 3), mines)?;
///
/// assert!(board.is_mine(Cell::new(2, 2)));
/// assert_eq!(board.nearby_mines(Cell::new(1, 1)), 1);
/// assert_eq!(board.nearby_mines(Cell::new(0, 0)), 0);
/// # Ok::<(), mineswept_game::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: GridSize,
    mines: CellSet,
    flagged: CellSet,
}

impl Board {
    /// Creates a board with exactly `mine_count` mines at distinct,
    /// uniformly chosen cells.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TooManyMines`] if `mine_count` exceeds the
    /// number of cells.
    pub fn generate<R: Rng + ?Sized>(
        size: GridSize,
        mine_count: usize,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        if mine_count > size.cell_count() {
            return Err(BoardError::TooManyMines {
                requested: mine_count,
                available: size.cell_count(),
            });
        }
        let mut cells: Vec<Cell> = size.cells().collect();
        cells.shuffle(rng);
        let mines = cells.into_iter().take(mine_count).collect();
        Ok(Self {
            size,
            mines,
            flagged: CellSet::new(),
        })
    }

    /// Creates a board with the given mine placement.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MineOutOfBounds`] if any mine lies outside the
    /// board.
    pub fn with_mines(size: GridSize, mines: CellSet) -> Result<Self, BoardError> {
        if let Some(cell) = mines.iter().find(|&cell| !size.contains(cell)) {
            return Err(BoardError::MineOutOfBounds { cell, size });
        }
        Ok(Self {
            size,
            mines,
            flagged: CellSet::new(),
        })
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the number of mines on the board.
    #[must_use]
    pub fn mine_count(&self) -> usize {
        self.mines.len()
    }

    /// Returns the mines flagged so far.
    #[must_use]
    pub fn flagged(&self) -> &CellSet {
        &self.flagged
    }

    /// Returns `true` if `cell` holds a mine.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    #[must_use]
    pub fn is_mine(&self, cell: Cell) -> bool {
        assert!(
            self.size.contains(cell),
            "cell {cell} out of bounds for a {} board",
            self.size
        );
        self.mines.contains(cell)
    }

    /// Returns the number of mines among the up-to-8 neighbors of `cell`,
    /// not counting `cell` itself.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    #[must_use]
    pub fn nearby_mines(&self, cell: Cell) -> u8 {
        assert!(
            self.size.contains(cell),
            "cell {cell} out of bounds for a {} board",
            self.size
        );
        self.size
            .neighbors(cell)
            .filter(|&neighbor| self.mines.contains(neighbor))
            .fold(0, |count, _| count + 1)
    }

    /// Flags `cell` as a found mine.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotAMine`] if the cell holds no mine, leaving
    /// the flagged set unchanged — flagged cells are always a subset of the
    /// mines.
    pub fn flag_mine(&mut self, cell: Cell) -> Result<(), BoardError> {
        if !self.mines.contains(cell) {
            return Err(BoardError::NotAMine { cell });
        }
        self.flagged.insert(cell);
        Ok(())
    }

    /// Returns `true` if every mine has been flagged.
    #[must_use]
    pub fn won(&self) -> bool {
        self.flagged == self.mines
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn mines(cells: &[(u8, u8)]) -> CellSet {
        cells.iter().map(|&(r, c)| Cell::new(r, c)).collect()
    }

    #[test]
    fn test_generate_places_exact_mine_count() {
        let size = GridSize::new(8, 8);
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        let board = Board::generate(size, 10, &mut rng).unwrap();
        assert_eq!(board.mine_count(), 10);
        let placed = size.cells().filter(|&cell| board.is_mine(cell)).count();
        assert_eq!(placed, 10);
    }

    #[test]
    fn test_generate_is_reproducible() {
        let size = GridSize::new(8, 8);
        let a = Board::generate(size, 10, &mut Pcg64Mcg::seed_from_u64(3)).unwrap();
        let b = Board::generate(size, 10, &mut Pcg64Mcg::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_rejects_too_many_mines() {
        let size = GridSize::new(3, 3);
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        assert_eq!(
            Board::generate(size, 10, &mut rng),
            Err(BoardError::TooManyMines {
                requested: 10,
                available: 9,
            })
        );
    }

    #[test]
    fn test_with_mines_rejects_out_of_bounds() {
        let err = Board::with_mines(GridSize::new(3, 3), mines(&[(1, 1), (3, 0)])).unwrap_err();
        assert_eq!(
            err,
            BoardError::MineOutOfBounds {
                cell: Cell::new(3, 0),
                size: GridSize::new(3, 3),
            }
        );
    }

    #[test]
    fn test_nearby_mines_counts_neighbors_only() {
        let board = Board::with_mines(GridSize::new(3, 3), mines(&[(0, 0), (2, 2)])).unwrap();
        assert_eq!(board.nearby_mines(Cell::new(1, 1)), 2);
        assert_eq!(board.nearby_mines(Cell::new(0, 1)), 1);
        // A mined cell does not count itself.
        assert_eq!(board.nearby_mines(Cell::new(0, 0)), 0);
    }

    #[test]
    fn test_flagging_all_mines_wins() {
        let mut board = Board::with_mines(GridSize::new(3, 3), mines(&[(0, 0), (2, 2)])).unwrap();
        assert!(!board.won());
        board.flag_mine(Cell::new(0, 0)).unwrap();
        assert!(!board.won());
        board.flag_mine(Cell::new(2, 2)).unwrap();
        assert!(board.won());
    }

    #[test]
    fn test_flagging_a_safe_cell_is_rejected() {
        let mut board = Board::with_mines(GridSize::new(3, 3), mines(&[(0, 0)])).unwrap();
        assert_eq!(
            board.flag_mine(Cell::new(1, 1)),
            Err(BoardError::NotAMine {
                cell: Cell::new(1, 1)
            })
        );
        assert!(board.flagged().is_empty());
    }

    #[test]
    fn test_empty_board_is_won_immediately() {
        let board = Board::with_mines(GridSize::new(2, 2), CellSet::new()).unwrap();
        assert!(board.won());
    }
}
