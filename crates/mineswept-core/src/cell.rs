//! Board coordinates and grid dimensions.

use derive_more::Display;
use tinyvec::ArrayVec;

/// A board cell identified by its row and column.
///
/// Cells are small copyable values with value equality, ordering, and
/// hashing, so they can be used directly as set and map keys. Ordering is
/// row-major: all cells of row 0 sort before all cells of row 1.
///
/// # Examples
///
/// ```
/// use mineswept_core::Cell;
///
/// let cell = Cell::new(2, 5);
/// assert_eq!(cell.row(), 2);
/// assert_eq!(cell.col(), 5);
/// assert_eq!(cell.to_string(), "(2, 5)");
/// assert!(Cell::new(0, 7) < Cell::new(1, 0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("({row}, {col})")]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Creates a cell at the given row and column.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the row coordinate.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column coordinate.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }
}

/// Row and column offsets of the eight surrounding cells.
const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The dimensions of a board, owning bounds checks and neighborhood
/// computation.
///
/// # Examples
///
/// ```
/// use mineswept_core::{Cell, GridSize};
///
/// let size = GridSize::new(8, 8);
/// assert_eq!(size.cell_count(), 64);
/// assert!(size.contains(Cell::new(7, 7)));
/// assert!(!size.contains(Cell::new(8, 0)));
///
/// // A corner cell has three in-bounds neighbors.
/// assert_eq!(size.neighbors(Cell::new(0, 0)).count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{height}x{width}")]
pub struct GridSize {
    height: u8,
    width: u8,
}

impl GridSize {
    /// Creates grid dimensions of `height` rows and `width` columns.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(height: u8, width: u8) -> Self {
        assert!(height > 0 && width > 0, "grid dimensions must be nonzero");
        Self { height, width }
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn height(self) -> u8 {
        self.height
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn width(self) -> u8 {
        self.width
    }

    /// Returns the total number of cells on the board.
    #[must_use]
    pub fn cell_count(self) -> usize {
        usize::from(self.height) * usize::from(self.width)
    }

    /// Returns `true` if `cell` lies within the board.
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        cell.row() < self.height && cell.col() < self.width
    }

    /// Returns an iterator over all cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Cell::new(row, col)))
    }

    /// Returns an iterator over the in-bounds neighbors of `cell`.
    ///
    /// Yields at most eight cells: the cells within one row and one column
    /// of `cell`, excluding `cell` itself and anything off the board.
    pub fn neighbors(self, cell: Cell) -> impl Iterator<Item = Cell> {
        let mut found = ArrayVec::<[Cell; 8]>::new();
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let row = cell.row().checked_add_signed(dr);
            let col = cell.col().checked_add_signed(dc);
            if let (Some(row), Some(col)) = (row, col) {
                let neighbor = Cell::new(row, col);
                if self.contains(neighbor) {
                    found.push(neighbor);
                }
            }
        }
        found.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_ordering_is_row_major() {
        assert!(Cell::new(0, 9) < Cell::new(1, 0));
        assert!(Cell::new(3, 2) < Cell::new(3, 3));
        assert_eq!(Cell::new(4, 4), Cell::new(4, 4));
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::new(0, 7).to_string(), "(0, 7)");
    }

    #[test]
    fn test_cells_iterates_row_major() {
        let size = GridSize::new(2, 3);
        let cells: Vec<_> = size.cells().collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_neighbor_counts() {
        let size = GridSize::new(3, 3);
        // Corner, edge, center.
        assert_eq!(size.neighbors(Cell::new(0, 0)).count(), 3);
        assert_eq!(size.neighbors(Cell::new(0, 1)).count(), 5);
        assert_eq!(size.neighbors(Cell::new(1, 1)).count(), 8);
    }

    #[test]
    fn test_neighbors_exclude_self_and_out_of_bounds() {
        let size = GridSize::new(2, 2);
        let neighbors: Vec<_> = size.neighbors(Cell::new(1, 1)).collect();
        assert_eq!(
            neighbors,
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0)]
        );
    }

    #[test]
    fn test_single_row_grid() {
        let size = GridSize::new(1, 4);
        assert_eq!(size.neighbors(Cell::new(0, 2)).count(), 2);
    }

    #[test]
    #[should_panic(expected = "grid dimensions must be nonzero")]
    fn test_zero_dimension_panics() {
        let _ = GridSize::new(0, 5);
    }
}
