//! Ordered sets of board cells.

use std::{
    collections::BTreeSet,
    fmt::{self, Display},
    ops::Sub,
};

use crate::Cell;

/// An ordered set of distinct [`Cell`]s.
///
/// This is the carrier type for counting constraints and for the agent's
/// classification sets. The backing `BTreeSet` keeps iteration order
/// deterministic (row-major), which makes move selection and test output
/// reproducible.
///
/// Set difference is available through the `-` operator:
///
/// ```
/// use mineswept_core::{Cell, CellSet};
///
/// let a: CellSet = [Cell::new(0, 0), Cell::new(0, 1)].into_iter().collect();
/// let b: CellSet = [Cell::new(0, 0)].into_iter().collect();
///
/// assert!(b.is_subset(&a));
/// let rest = &a - &b;
/// assert_eq!(rest.len(), 1);
/// assert!(rest.contains(Cell::new(0, 1)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellSet {
    cells: BTreeSet<Cell>,
}

impl CellSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: BTreeSet::new(),
        }
    }

    /// Inserts a cell, returning `true` if it was not already present.
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Removes a cell, returning `true` if it was present.
    pub fn remove(&mut self, cell: Cell) -> bool {
        self.cells.remove(&cell)
    }

    /// Returns `true` if the set contains `cell`.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Returns the number of cells in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the set contains no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if every cell of `self` is contained in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.cells.is_subset(&other.cells)
    }

    /// Returns the smallest cell in the set, if any.
    #[must_use]
    pub fn first(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    /// Returns an iterator over the cells in ascending (row-major) order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}

impl Sub for &CellSet {
    type Output = CellSet;

    /// Returns the cells of `self` that are not in `rhs`.
    fn sub(self, rhs: Self) -> CellSet {
        CellSet {
            cells: &self.cells - &rhs.cells,
        }
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cell> for CellSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = std::collections::btree_set::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = &'a Cell;
    type IntoIter = std::collections::btree_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl Display for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, cell) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, "}}")
    }
}
