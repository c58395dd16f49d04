//! Error types for the game orchestrator.

use thiserror::Error;

use fd_core::DiceError;
use fd_protocol::FairError;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can end a game.
#[derive(Debug, Error)]
pub enum GameError {
    /// The human party chose to leave.
    #[error("game aborted by user")]
    Aborted,

    /// A game needs at least two dice to choose from.
    #[error("at least 2 dice are needed to play, got {0}")]
    NotEnoughDice(usize),

    /// The user selected a die that does not exist.
    #[error("invalid selection: die {choice} does not exist (choose 1..{count})")]
    SelectionOutOfRange {
        /// The 1-based number the user chose.
        choice: usize,
        /// Number of dice available.
        count: usize,
    },

    /// The user's selection could not be understood.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// Reading from or writing to the player failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A dice lookup failed.
    #[error("{0}")]
    Dice(#[from] DiceError),

    /// A fair draw failed.
    #[error("{0}")]
    Fair(#[from] FairError),
}

impl GameError {
    /// Returns true when the user ended the game deliberately.
    pub fn is_abort(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}
