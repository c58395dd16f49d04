//! The human side of a game.
//!
//! The orchestrator never touches a terminal. Everything the user sees or
//! decides goes through a [`Player`], so the same game runs against a
//! console, a scripted test double, or any other frontend.

use fd_core::{DiceSet, Die, ProbabilityMatrix};
use fd_protocol::{Commitment, FairError, Reveal};

use crate::error::GameResult;
use crate::outcome::GameReport;
use crate::phase::{DrawPurpose, Party, Phase};

/// Input and output for the user's side of the table.
///
/// Any method may return [`GameError::Aborted`](crate::GameError::Aborted)
/// to leave the game. Notification methods default to doing nothing.
pub trait Player {
    /// Pick a contribution for a fair draw, ideally in `[0, range)`.
    ///
    /// Values outside the range are rejected via [`on_rejected`](Self::on_rejected)
    /// and this method is called again.
    fn pick_number(&mut self, purpose: DrawPurpose, range: u32) -> GameResult<u32>;

    /// Whether to show the probability table before selecting dice.
    fn wants_help(&mut self) -> GameResult<bool>;

    /// Select a die by its 1-based number in `dice`.
    fn select_die(&mut self, dice: &DiceSet) -> GameResult<usize>;

    /// The game entered `phase`.
    fn on_phase(&mut self, _phase: Phase) -> GameResult<()> {
        Ok(())
    }

    /// The computer committed to a value; called before [`pick_number`](Self::pick_number).
    fn on_commitment(
        &mut self,
        _purpose: DrawPurpose,
        _range: u32,
        _commitment: &Commitment,
    ) -> GameResult<()> {
        Ok(())
    }

    /// The last number was not accepted.
    fn on_rejected(&mut self, _error: &FairError) -> GameResult<()> {
        Ok(())
    }

    /// The computer revealed its value and key.
    fn on_reveal(&mut self, _purpose: DrawPurpose, _reveal: &Reveal) -> GameResult<()> {
        Ok(())
    }

    /// The first-move draw decided who selects first.
    fn on_first_mover(&mut self, _party: Party) -> GameResult<()> {
        Ok(())
    }

    /// Show the pairwise win probabilities.
    fn show_probabilities(
        &mut self,
        _dice: &DiceSet,
        _matrix: &ProbabilityMatrix,
    ) -> GameResult<()> {
        Ok(())
    }

    /// The computer selected die `index` (0-based).
    fn on_computer_die(&mut self, _index: usize, _die: &Die) -> GameResult<()> {
        Ok(())
    }

    /// A die was rolled for `party`.
    fn on_roll(&mut self, _party: Party, _face: i64) -> GameResult<()> {
        Ok(())
    }

    /// The game is over.
    fn on_outcome(&mut self, _report: &GameReport) -> GameResult<()> {
        Ok(())
    }
}
