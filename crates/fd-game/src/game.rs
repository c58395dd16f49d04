//! Game orchestration.
//!
//! `Game` walks the [`Phase`] sequence once: a fair draw decides who picks
//! first, the optional help table is shown, both parties select dice, each
//! die is rolled with its own fair draw, and the faces are compared.
//!
//! Only turn order and rolls go through the commit-reveal protocol. The
//! computer's die choice is plain local randomness.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use fd_core::{DiceSet, ProbabilityMatrix};
use fd_protocol::{FairRandomValue, SecureRandomSource};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::outcome::{GameReport, Outcome};
use crate::phase::{DrawPurpose, Party, Phase};
use crate::player::Player;

/// A single game over a dice set.
pub struct Game<'a, R> {
    dice: &'a DiceSet,
    source: R,
    picker: StdRng,
    config: GameConfig,
    phase: Phase,
}

impl<'a, R: SecureRandomSource> Game<'a, R> {
    /// Prepare a game. `source` supplies the computer's side of every fair draw.
    pub fn new(dice: &'a DiceSet, source: R, config: GameConfig) -> GameResult<Self> {
        if dice.len() < 2 {
            return Err(GameError::NotEnoughDice(dice.len()));
        }
        let picker = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            dice,
            source,
            picker,
            config,
            phase: Phase::DetermineFirstMover,
        })
    }

    /// The phase the game is in.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Play the game to the end.
    ///
    /// On abort the draw in flight is dropped unrevealed.
    pub fn play<P: Player + ?Sized>(mut self, player: &mut P) -> GameResult<GameReport> {
        player.on_phase(self.phase)?;
        let first_move = self.fair_draw(DrawPurpose::FirstMove, 2, player)?;
        let first_mover = if first_move == 1 {
            Party::User
        } else {
            Party::Computer
        };
        debug!(%first_mover, "first mover decided");
        player.on_first_mover(first_mover)?;

        self.advance(player)?;
        if self.config.offer_help && player.wants_help()? {
            let matrix = ProbabilityMatrix::from_dice(self.dice);
            player.show_probabilities(self.dice, &matrix)?;
        }

        self.advance(player)?;
        let (user_die, computer_die) = match first_mover {
            Party::User => {
                let user_die = self.user_selection(player)?;
                self.advance(player)?;
                let computer_die = self.computer_selection(Some(user_die), player)?;
                (user_die, computer_die)
            }
            Party::Computer => {
                let computer_die = self.computer_selection(None, player)?;
                self.advance(player)?;
                let user_die = self.user_selection(player)?;
                (user_die, computer_die)
            }
        };

        self.advance(player)?;
        let user_roll = self.roll(DrawPurpose::UserRoll, user_die, player)?;
        player.on_roll(Party::User, user_roll)?;

        self.advance(player)?;
        let computer_roll = self.roll(DrawPurpose::ComputerRoll, computer_die, player)?;
        player.on_roll(Party::Computer, computer_roll)?;

        self.advance(player)?;
        let outcome = Outcome::compare(user_roll, computer_roll);
        let report = GameReport {
            first_mover,
            user_die,
            computer_die,
            user_roll,
            computer_roll,
            outcome,
        };
        debug!(?report, "game resolved");

        self.advance(player)?;
        player.on_outcome(&report)?;
        Ok(report)
    }

    fn advance<P: Player + ?Sized>(&mut self, player: &mut P) -> GameResult<()> {
        self.phase = self.phase.next();
        trace!(phase = ?self.phase, "entering phase");
        player.on_phase(self.phase)
    }

    /// Run one commit-reveal draw with the player as counterpart.
    fn fair_draw<P: Player + ?Sized>(
        &mut self,
        purpose: DrawPurpose,
        range: u32,
        player: &mut P,
    ) -> GameResult<u32> {
        let draw = FairRandomValue::new(range, &mut self.source)?;
        player.on_commitment(purpose, range, draw.commitment())?;

        let user_value = loop {
            let value = player.pick_number(purpose, range)?;
            match draw.check_user_value(value) {
                Ok(()) => break value,
                Err(e) => {
                    debug!(%purpose, value, range, "rejected user value");
                    player.on_rejected(&e)?;
                }
            }
        };

        let reveal = draw.reveal(user_value)?;
        player.on_reveal(purpose, &reveal)?;
        Ok(reveal.result())
    }

    fn user_selection<P: Player + ?Sized>(&mut self, player: &mut P) -> GameResult<usize> {
        let count = self.dice.len();
        let choice = player.select_die(self.dice)?;
        if choice == 0 || choice > count {
            return Err(GameError::SelectionOutOfRange { choice, count });
        }
        Ok(choice - 1)
    }

    /// Pick uniformly among all dice, or among those other than `taken`.
    fn computer_selection<P: Player + ?Sized>(
        &mut self,
        taken: Option<usize>,
        player: &mut P,
    ) -> GameResult<usize> {
        let count = self.dice.len();
        let index = match taken {
            Some(taken) => {
                let index = self.picker.random_range(0..count - 1);
                if index >= taken { index + 1 } else { index }
            }
            None => self.picker.random_range(0..count),
        };
        player.on_computer_die(index, self.dice.die(index)?)?;
        Ok(index)
    }

    fn roll<P: Player + ?Sized>(
        &mut self,
        purpose: DrawPurpose,
        die_index: usize,
        player: &mut P,
    ) -> GameResult<i64> {
        let dice = self.dice;
        let die = dice.die(die_index)?;
        let sides = u32::try_from(die.sides()).unwrap_or(u32::MAX);
        let face_index = self.fair_draw(purpose, sides, player)?;
        Ok(die.face(face_index as usize)?)
    }
}
