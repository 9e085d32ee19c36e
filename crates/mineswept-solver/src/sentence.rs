//! Counting constraints over board cells.

use std::fmt::{self, Display};

use mineswept_core::{Cell, CellSet};

/// A logical statement about the board: exactly `count` of `cells` are
/// mines.
///
/// A sentence only ever talks about cells whose state is still unknown.
/// The moment a cell is classified, it is removed from every sentence via
/// [`mark_mine`](Self::mark_mine) or [`mark_safe`](Self::mark_safe), with
/// the count adjusted so the statement stays true for the remaining cells.
/// Those two methods are the only mutators.
///
/// Invariant: `count <= cells.len()` at all times. Violations are logic
/// defects and abort.
///
/// # Examples
///
/// ```
/// use mineswept_core::{Cell, CellSet};
/// use mineswept_solver::Sentence;
///
/// let cells: CellSet = [Cell::new(0, 0), Cell::new(0, 1)].into_iter().collect();
/// let mut sentence = Sentence::new(cells, 1);
/// assert!(sentence.known_mines().is_none());
///
/// // Learning that (0, 0) is safe narrows the constraint to {(0, 1)} = 1:
/// // the remaining cell must be the mine.
/// sentence.mark_safe(Cell::new(0, 0));
/// let mines = sentence.known_mines().unwrap();
/// assert!(mines.contains(Cell::new(0, 1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    cells: CellSet,
    count: u8,
}

impl Sentence {
    /// Creates a sentence asserting that exactly `count` of `cells` are
    /// mines.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds the number of cells.
    #[must_use]
    pub fn new(cells: CellSet, count: u8) -> Self {
        assert!(
            usize::from(count) <= cells.len(),
            "sentence count {count} exceeds its {} cells",
            cells.len()
        );
        Self { cells, count }
    }

    /// Returns the cells this sentence talks about.
    #[must_use]
    pub fn cells(&self) -> &CellSet {
        &self.cells
    }

    /// Returns the number of mines among [`cells`](Self::cells).
    #[must_use]
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Returns `true` if the sentence talks about no cells.
    ///
    /// Empty sentences carry no information and are pruned from the
    /// knowledge base.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns all cells if every one of them must be a mine, i.e. the
    /// count equals the number of cells.
    #[must_use]
    pub fn known_mines(&self) -> Option<&CellSet> {
        (!self.is_empty() && usize::from(self.count) == self.cells.len()).then_some(&self.cells)
    }

    /// Returns all cells if none of them can be a mine, i.e. the count is
    /// zero.
    #[must_use]
    pub fn known_safes(&self) -> Option<&CellSet> {
        (!self.is_empty() && self.count == 0).then_some(&self.cells)
    }

    /// Records that `cell` is a mine.
    ///
    /// If the sentence contains `cell`, it is removed and the count drops
    /// by one: one of the required mines has been found, and the statement
    /// keeps holding for the remaining cells. Returns `true` if the
    /// sentence changed.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is contained but the count is already zero — the
    /// sentence asserted that all its cells are safe, so a mine among them
    /// is a contradiction.
    pub fn mark_mine(&mut self, cell: Cell) -> bool {
        if !self.cells.remove(cell) {
            return false;
        }
        assert!(
            self.count > 0,
            "cell {cell} marked as mine contradicts {self}"
        );
        self.count -= 1;
        true
    }

    /// Records that `cell` is safe.
    ///
    /// If the sentence contains `cell`, it is removed; the count is
    /// unchanged since no mine was accounted for. Returns `true` if the
    /// sentence changed.
    ///
    /// # Panics
    ///
    /// Panics if removing `cell` leaves fewer cells than required mines —
    /// the cell was needed as a mine, so calling it safe is a
    /// contradiction.
    pub fn mark_safe(&mut self, cell: Cell) -> bool {
        if !self.cells.remove(cell) {
            return false;
        }
        assert!(
            usize::from(self.count) <= self.cells.len(),
            "cell {cell} marked as safe contradicts the remaining {self}"
        );
        true
    }
}

impl Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.cells, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(cells: &[(u8, u8)], count: u8) -> Sentence {
        Sentence::new(cells.iter().map(|&(r, c)| Cell::new(r, c)).collect(), count)
    }

    #[test]
    fn test_full_count_resolves_to_mines() {
        let s = sentence(&[(0, 0), (0, 1)], 2);
        assert_eq!(s.known_mines(), Some(s.cells()));
        assert_eq!(s.known_safes(), None);
    }

    #[test]
    fn test_zero_count_resolves_to_safes() {
        let s = sentence(&[(0, 0), (0, 1)], 0);
        assert_eq!(s.known_safes(), Some(s.cells()));
        assert_eq!(s.known_mines(), None);
    }

    #[test]
    fn test_partial_count_resolves_to_nothing() {
        let s = sentence(&[(0, 0), (0, 1), (1, 1)], 1);
        assert_eq!(s.known_mines(), None);
        assert_eq!(s.known_safes(), None);
    }

    #[test]
    fn test_mark_mine_shrinks_cells_and_count() {
        let mut s = sentence(&[(0, 0), (0, 1), (1, 1)], 2);
        assert!(s.mark_mine(Cell::new(0, 1)));
        assert_eq!(s.cells().len(), 2);
        assert_eq!(s.count(), 1);
    }

    #[test]
    fn test_mark_mine_on_absent_cell_is_noop() {
        let mut s = sentence(&[(0, 0), (0, 1)], 1);
        let before = s.clone();
        assert!(!s.mark_mine(Cell::new(5, 5)));
        assert_eq!(s, before);
    }

    #[test]
    fn test_mark_safe_keeps_count() {
        // {(0, 0), (0, 1)} = 0, then (0, 0) is confirmed safe.
        let mut s = sentence(&[(0, 0), (0, 1)], 0);
        assert!(s.mark_safe(Cell::new(0, 0)));
        assert_eq!(s.cells().len(), 1);
        assert!(s.cells().contains(Cell::new(0, 1)));
        assert_eq!(s.count(), 0);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = sentence(&[(0, 0), (1, 1)], 1);
        let b = sentence(&[(1, 1), (0, 0)], 1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let s = sentence(&[(0, 1), (1, 0)], 1);
        assert_eq!(s.to_string(), "{(0, 1), (1, 0)} = 1");
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn test_overfull_count_panics() {
        let _ = sentence(&[(0, 0)], 2);
    }

    #[test]
    #[should_panic(expected = "contradicts")]
    fn test_mine_in_all_safe_sentence_panics() {
        let mut s = sentence(&[(0, 0), (0, 1)], 0);
        s.mark_mine(Cell::new(0, 0));
    }

    #[test]
    #[should_panic(expected = "contradicts")]
    fn test_safe_needed_as_mine_panics() {
        let mut s = sentence(&[(0, 0)], 1);
        s.mark_safe(Cell::new(0, 0));
    }
}
