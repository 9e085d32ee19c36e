//! The knowledge base and its fixed-point closure.

use log::trace;
use mineswept_core::{Cell, CellSet};

use crate::Sentence;

/// Cells classified by a closure pass, split by verdict.
///
/// The two sets are always disjoint; a cell classified both ways is a
/// contradiction and aborts the closure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Cells proven to be mines.
    pub mines: CellSet,
    /// Cells proven to be safe.
    pub safes: CellSet,
}

impl Classification {
    /// Returns `true` if the pass classified no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mines.is_empty() && self.safes.is_empty()
    }
}

/// The collection of sentences currently known to be true.
///
/// Sentences are owned by value; nothing outside the knowledge base holds a
/// reference to one, so propagating a classification can never observe a
/// sentence through two paths. Duplicate and empty sentences are rejected
/// on insertion.
///
/// [`close`](Self::close) drives the base to a fixed point: it applies the
/// zero-count and full-count classification rules and subset resolution
/// until a full pass derives nothing new, and reports every cell classified
/// along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    sentences: Vec<Sentence>,
}

impl KnowledgeBase {
    /// Creates an empty knowledge base.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sentences currently held.
    #[must_use]
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Returns the number of sentences currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Returns `true` if no sentences are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Inserts a sentence, returning `true` if it was kept.
    ///
    /// Empty sentences carry no information and duplicates add none, so
    /// both are rejected.
    pub fn insert(&mut self, sentence: Sentence) -> bool {
        if sentence.is_empty() || self.sentences.contains(&sentence) {
            return false;
        }
        trace!("learned {sentence}");
        self.sentences.push(sentence);
        true
    }

    /// Propagates the fact that `cell` is a mine to every sentence.
    pub fn mark_mine(&mut self, cell: Cell) {
        for sentence in &mut self.sentences {
            sentence.mark_mine(cell);
        }
    }

    /// Propagates the fact that `cell` is safe to every sentence.
    pub fn mark_safe(&mut self, cell: Cell) {
        for sentence in &mut self.sentences {
            sentence.mark_safe(cell);
        }
    }

    /// Runs classification and subset resolution to a fixed point and
    /// returns the cells classified.
    ///
    /// Each pass has three phases, all operating on staging structures so
    /// that the sentence list is never modified while it is being scanned:
    ///
    /// 1. Collect the verdicts of every resolved sentence, then apply each
    ///    one to every sentence in the base.
    /// 2. Prune sentences whose cell set became empty, and duplicates
    ///    created when propagation collapses two sentences into the same
    ///    constraint.
    /// 3. For every ordered pair of distinct sentences where `A.cells` is a
    ///    subset of `B.cells`, derive `B.cells − A.cells = B.count −
    ///    A.count` and insert it if it is new and nonempty. `A` and `B`
    ///    both remain: they are still valid constraints in their own right.
    ///
    /// Passes repeat until one changes nothing. Every derivation is a
    /// logical consequence, never a guess, so the fixed point is the same
    /// regardless of scan order, and calling `close` again immediately
    /// classifies nothing.
    ///
    /// # Panics
    ///
    /// Panics if the sentences are contradictory: a cell proven to be both
    /// a mine and safe, or a subset pair requiring more mines than its
    /// superset allows.
    pub fn close(&mut self) -> Classification {
        let mut found = Classification::default();

        loop {
            let mut changed = false;

            // Phase 1: classification. Verdicts are collected before any
            // of them is applied, so every sentence contributes based on
            // the same snapshot.
            let mut mines = CellSet::new();
            let mut safes = CellSet::new();
            for sentence in &self.sentences {
                if let Some(cells) = sentence.known_mines() {
                    mines.extend(cells.iter());
                }
                if let Some(cells) = sentence.known_safes() {
                    safes.extend(cells.iter());
                }
            }
            for cell in mines.iter() {
                assert!(
                    !safes.contains(cell),
                    "cell {cell} classified as both mine and safe"
                );
                if found.mines.insert(cell) {
                    changed = true;
                }
                self.mark_mine(cell);
            }
            for cell in safes.iter() {
                if found.safes.insert(cell) {
                    changed = true;
                }
                self.mark_safe(cell);
            }

            // Phase 2: prune emptied sentences, plus duplicates that the
            // propagation above may have collapsed distinct sentences into.
            let mut kept: Vec<Sentence> = Vec::with_capacity(self.sentences.len());
            for sentence in self.sentences.drain(..) {
                if !sentence.is_empty() && !kept.contains(&sentence) {
                    kept.push(sentence);
                }
            }
            self.sentences = kept;

            // Phase 3: subset resolution, staged.
            let mut derived = Vec::new();
            for (i, a) in self.sentences.iter().enumerate() {
                for (j, b) in self.sentences.iter().enumerate() {
                    if i == j || !a.cells().is_subset(b.cells()) {
                        continue;
                    }
                    assert!(
                        b.count() >= a.count(),
                        "contradictory sentences: {a} and {b}"
                    );
                    let cells = b.cells() - a.cells();
                    if cells.is_empty() {
                        continue;
                    }
                    let inferred = Sentence::new(cells, b.count() - a.count());
                    if !self.sentences.contains(&inferred) && !derived.contains(&inferred) {
                        derived.push(inferred);
                    }
                }
            }
            for sentence in derived {
                changed |= self.insert(sentence);
            }

            if !changed {
                break;
            }
        }

        found
    }
}
