//! Validation policy for textual dice specifications.
//!
//! The dice types only enforce structural invariants (at least two faces,
//! at least one die). How many dice a game needs and whether they must
//! share a side count is decided here, at the input boundary.

use crate::dice::{DiceSet, Die, MIN_SIDES};
use crate::error::{DiceError, DiceResult};

/// Rules applied when turning dice specifications into a [`DiceSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DicePolicy {
    /// Minimum number of dice.
    pub min_dice: usize,
    /// Minimum number of faces per die (never below [`MIN_SIDES`]).
    pub min_sides: usize,
    /// Whether every die must have the same number of faces.
    pub uniform_sides: bool,
}

impl Default for DicePolicy {
    fn default() -> Self {
        Self {
            min_dice: 3,
            min_sides: MIN_SIDES,
            uniform_sides: true,
        }
    }
}

impl DicePolicy {
    /// Set the minimum number of dice.
    pub fn with_min_dice(mut self, min_dice: usize) -> Self {
        self.min_dice = min_dice.max(1);
        self
    }

    /// Set the minimum number of faces per die (clamped to at least 2).
    pub fn with_min_sides(mut self, min_sides: usize) -> Self {
        self.min_sides = min_sides.max(MIN_SIDES);
        self
    }

    /// Allow dice with different side counts in one set.
    pub fn allow_mixed_sides(mut self) -> Self {
        self.uniform_sides = false;
        self
    }

    /// Parse one specification per die, e.g. `["2,2,4,4,9,9", "1,1,6,6,8,8", ...]`.
    pub fn parse<S: AsRef<str>>(&self, specs: &[S]) -> DiceResult<DiceSet> {
        if specs.len() < self.min_dice {
            return Err(DiceError::TooFewDice {
                found: specs.len(),
                min: self.min_dice,
            });
        }

        let dice = specs
            .iter()
            .enumerate()
            .map(|(i, spec)| self.parse_die(i + 1, spec.as_ref()))
            .collect::<DiceResult<Vec<_>>>()?;

        if self.uniform_sides
            && let Some(first) = dice.first()
        {
            let expected = first.sides();
            if let Some((i, die)) = dice
                .iter()
                .enumerate()
                .find(|(_, d)| d.sides() != expected)
            {
                return Err(DiceError::MixedSides {
                    die: i + 1,
                    expected,
                    found: die.sides(),
                });
            }
        }

        DiceSet::new(dice)
    }

    fn parse_die(&self, position: usize, spec: &str) -> DiceResult<Die> {
        let die: Die = spec.parse().map_err(|e: DiceError| e.at_die(position))?;
        if die.sides() < self.min_sides {
            return Err(DiceError::TooFewSides {
                die: Some(position),
                found: die.sides(),
                min: self.min_sides,
            });
        }
        Ok(die)
    }
}

/// Split the contents of a dice file into specifications.
///
/// One die per line; blank lines and `#` comments are skipped.
pub fn read_specs(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
