//! The deduction agent and its move policy.

use log::debug;
use mineswept_core::{Cell, CellSet, GridSize};
use rand::{Rng, seq::IndexedRandom};

use crate::{KnowledgeBase, Sentence};

/// A Minesweeper player that deduces safe and mined cells from local count
/// observations.
///
/// The agent never sees the board. The game loop reveals a cell, asks the
/// board how many of its neighbors are mines, and feeds both to
/// [`add_knowledge`](Self::add_knowledge); the agent turns the observation
/// into a [`Sentence`], drives the knowledge base to a fixed point, and
/// updates its global classification sets. Once a cell lands in
/// [`known_mines`](Self::known_mines) or [`known_safes`](Self::known_safes)
/// it stays there: every classification is a proven consequence of the
/// observations, never a guess.
///
/// Randomness only enters through the [`Rng`] handed to
/// [`make_random_move`](Self::make_random_move), so a seeded generator
/// reproduces a run exactly.
///
/// # Examples
///
/// ```
/// use mineswept_core::{Cell, GridSize};
/// use mineswept_solver::Agent;
///
/// let mut agent = Agent::new(GridSize::new(3, 3));
///
/// // No mines around (0, 0): its three neighbors are safe.
/// agent.add_knowledge(Cell::new(0, 0), 0);
/// assert_eq!(agent.known_safes().len(), 4);
/// assert_eq!(agent.make_safe_move(), Some(Cell::new(0, 1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    size: GridSize,
    moves_made: CellSet,
    known_mines: CellSet,
    known_safes: CellSet,
    knowledge: KnowledgeBase,
}

impl Agent {
    /// Creates an agent for a board of the given size, knowing nothing.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            moves_made: CellSet::new(),
            known_mines: CellSet::new(),
            known_safes: CellSet::new(),
            knowledge: KnowledgeBase::new(),
        }
    }

    /// Returns the board size the agent reasons about.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the cells played so far.
    #[must_use]
    pub fn moves_made(&self) -> &CellSet {
        &self.moves_made
    }

    /// Returns the cells proven to be mines.
    #[must_use]
    pub fn known_mines(&self) -> &CellSet {
        &self.known_mines
    }

    /// Returns the cells proven to be safe.
    #[must_use]
    pub fn known_safes(&self) -> &CellSet {
        &self.known_safes
    }

    /// Returns the current knowledge base.
    #[must_use]
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Absorbs an observation: `cell` was revealed and has `count` mines
    /// among its neighbors.
    ///
    /// The cell is recorded as played and safe, the observation becomes a
    /// sentence over the still-unclassified neighbors (known mines are
    /// subtracted from the count, known safes are dropped from the set),
    /// and [`deduce`](Self::deduce) runs the knowledge base to a fixed
    /// point.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds, if `count` exceeds 8, or if the
    /// observation contradicts what has already been proven — all of these
    /// are contract violations by the caller.
    pub fn add_knowledge(&mut self, cell: Cell, count: u8) {
        assert!(
            self.size.contains(cell),
            "cell {cell} out of bounds for a {} board",
            self.size
        );
        assert!(count <= 8, "nearby mine count {count} out of range");

        self.moves_made.insert(cell);
        self.mark_safe(cell);

        let mut frontier = CellSet::new();
        let mut count = count;
        for neighbor in self.size.neighbors(cell) {
            if self.known_safes.contains(neighbor) {
                continue;
            }
            if self.known_mines.contains(neighbor) {
                // Already accounted for; the sentence only talks about
                // unknown cells.
                assert!(
                    count > 0,
                    "count at {cell} is lower than its known nearby mines"
                );
                count -= 1;
                continue;
            }
            frontier.insert(neighbor);
        }
        if !frontier.is_empty() {
            self.knowledge.insert(Sentence::new(frontier, count));
        }

        self.deduce();
    }

    /// Drives the knowledge base to a fixed point and merges every cell it
    /// classifies into the global sets.
    ///
    /// Calling this again without a new observation changes nothing.
    pub fn deduce(&mut self) {
        let found = self.knowledge.close();
        if found.is_empty() {
            return;
        }
        debug!(
            "deduced {} mine(s) {} and {} safe(s) {}",
            found.mines.len(),
            found.mines,
            found.safes.len(),
            found.safes,
        );
        for cell in found.mines {
            self.mark_mine(cell);
        }
        for cell in found.safes {
            self.mark_safe(cell);
        }
    }

    /// Returns a cell proven safe that has not been played yet.
    ///
    /// If no such cell is known, one extra [`deduce`](Self::deduce) pass
    /// runs before giving up, in case the knowledge base can still be
    /// narrowed without a fresh observation. Returns `None` when no safe
    /// move can be proven; the caller should fall back to
    /// [`make_random_move`](Self::make_random_move).
    pub fn make_safe_move(&mut self) -> Option<Cell> {
        if let Some(cell) = self.unplayed_safe() {
            return Some(cell);
        }
        self.deduce();
        self.unplayed_safe()
    }

    /// Returns a uniformly chosen cell that has not been played and is not
    /// a known mine, or `None` if no such cell remains.
    pub fn make_random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Cell> {
        let candidates: Vec<Cell> = self
            .size
            .cells()
            .filter(|&cell| !self.moves_made.contains(cell) && !self.known_mines.contains(cell))
            .collect();
        candidates.choose(rng).copied()
    }

    fn unplayed_safe(&self) -> Option<Cell> {
        self.known_safes
            .iter()
            .find(|&cell| !self.moves_made.contains(cell))
    }

    fn mark_mine(&mut self, cell: Cell) {
        assert!(
            !self.known_safes.contains(cell),
            "cell {cell} classified as both mine and safe"
        );
        if self.known_mines.insert(cell) {
            self.knowledge.mark_mine(cell);
        }
    }

    fn mark_safe(&mut self, cell: Cell) {
        assert!(
            !self.known_mines.contains(cell),
            "cell {cell} classified as both safe and mine"
        );
        if self.known_safes.insert(cell) {
            self.knowledge.mark_safe(cell);
        }
    }
}
