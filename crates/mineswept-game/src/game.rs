//! The game session connecting the board and the agent.

use derive_more::{Display, Error, IsVariant};
use log::debug;
use mineswept_core::Cell;
use mineswept_solver::Agent;
use rand::Rng;

use crate::Board;

/// The outcome state of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IsVariant)]
pub enum GameState {
    /// Moves remain to be played.
    #[display("in progress")]
    InProgress,
    /// Every mine has been flagged.
    #[display("won")]
    Won,
    /// A mine was revealed.
    #[display("lost on {mine}")]
    Lost {
        /// The revealed mine.
        mine: Cell,
    },
}

/// Errors from invalid game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The game has already been won or lost.
    #[display("the game is already finished")]
    Finished,
    /// The revealed cell lies outside the board.
    #[display("cell {cell} is outside the board")]
    OutOfBounds {
        /// The offending cell.
        cell: Cell,
    },
    /// The cell has already been revealed.
    #[display("cell {cell} was already revealed")]
    AlreadyRevealed {
        /// The offending cell.
        cell: Cell,
    },
}

/// A Minesweeper session played by the deduction agent.
///
/// The session owns the ground-truth [`Board`] and the [`Agent`] and moves
/// observations between them: revealing a safe cell feeds its true nearby
/// count to the agent, and every mine the agent proves is immediately
/// flagged on the board. The game is won once all mines are flagged, and
/// lost the moment a mine is revealed.
///
/// # Examples
///
/// ```
/// use mineswept_core::{Cell, CellSet, GridSize};
/// use mineswept_game::{Board, Game};
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64Mcg;
///
/// let mines: CellSet = [Cell::new(2, 2)].into_iter().collect();
/// let board = Board::with_mines(GridSize::new(3, 3), mines)?;
/// let mut game = Game::new(board);
///
/// // Opening the far corner gives the agent a foothold; from there every
/// // move is deduced and the single mine gets cornered.
/// game.reveal(Cell::new(0, 0)).unwrap();
/// let mut rng = Pcg64Mcg::seed_from_u64(0);
/// assert!(game.play(&mut rng).is_won());
/// # Ok::<(), mineswept_game::BoardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    agent: Agent,
    state: GameState,
}

impl Game {
    /// Creates a session for `board` with a fresh agent.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            agent: Agent::new(board.size()),
            board,
            state: GameState::InProgress,
        }
    }

    /// Returns the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the agent.
    #[must_use]
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Returns the current game state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Reveals `cell` and returns the resulting state.
    ///
    /// Revealing a mine loses the game. Otherwise the agent absorbs the
    /// observation, every newly proven mine is flagged, and the game is won
    /// once the flags cover the whole mine set.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is finished, the cell is out of bounds,
    /// or the cell was already revealed.
    pub fn reveal(&mut self, cell: Cell) -> Result<GameState, GameError> {
        if !self.state.is_in_progress() {
            return Err(GameError::Finished);
        }
        if !self.board.size().contains(cell) {
            return Err(GameError::OutOfBounds { cell });
        }
        if self.agent.moves_made().contains(cell) {
            return Err(GameError::AlreadyRevealed { cell });
        }

        if self.board.is_mine(cell) {
            debug!("revealed a mine at {cell}");
            self.state = GameState::Lost { mine: cell };
            return Ok(self.state);
        }

        let count = self.board.nearby_mines(cell);
        debug!("revealed {cell}: {count} nearby");
        self.agent.add_knowledge(cell, count);
        self.flag_known_mines();
        if self.board.won() {
            self.state = GameState::Won;
        }
        Ok(self.state)
    }

    /// Plays one move and returns the resulting state.
    ///
    /// A proven-safe cell is preferred; otherwise a uniformly random
    /// unplayed, unflagged cell is revealed. When neither exists every
    /// remaining cell is a proven mine, so the game finishes.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GameState {
        if !self.state.is_in_progress() {
            return self.state;
        }

        let cell = if let Some(cell) = self.agent.make_safe_move() {
            debug!("safe move: {cell}");
            cell
        } else if let Some(cell) = self.agent.make_random_move(rng) {
            debug!("random move: {cell}");
            cell
        } else {
            // Every cell is either revealed or a proven, flagged mine.
            assert!(self.board.won(), "moves exhausted with unflagged mines");
            self.state = GameState::Won;
            return self.state;
        };

        match self.reveal(cell) {
            Ok(state) => state,
            // The move policy only yields fresh in-bounds cells.
            Err(err) => unreachable!("move selection produced {cell}: {err}"),
        }
    }

    /// Plays moves until the game is won or lost, returning the final
    /// state.
    pub fn play<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GameState {
        while self.state.is_in_progress() {
            self.step(rng);
        }
        self.state
    }

    /// Flags every mine the agent has proven so far.
    fn flag_known_mines(&mut self) {
        for cell in self.agent.known_mines().iter() {
            assert!(
                self.board.flag_mine(cell).is_ok(),
                "agent proved a mine at {cell} that the board disputes"
            );
        }
    }
}
