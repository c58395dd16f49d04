//! Ordered collections of dice.

use serde::{Deserialize, Serialize};

use super::Die;
use crate::error::{DiceError, DiceResult};

/// An ordered, non-empty collection of dice.
///
/// Order is significant: it is the numbering players see when choosing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Die>", into = "Vec<Die>")]
pub struct DiceSet {
    dice: Vec<Die>,
}

impl DiceSet {
    /// Create a dice set. Fails only if `dice` is empty.
    pub fn new(dice: Vec<Die>) -> DiceResult<Self> {
        if dice.is_empty() {
            return Err(DiceError::EmptySet);
        }
        Ok(Self { dice })
    }

    /// Returns the die at `index`.
    pub fn die(&self, index: usize) -> DiceResult<&Die> {
        self.dice.get(index).ok_or(DiceError::DieOutOfRange {
            index,
            count: self.len(),
        })
    }

    /// All dice in construction order.
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Returns how many dice are in the set.
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Always false for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Iterate over the dice in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Die> {
        self.dice.iter()
    }

    /// The side count shared by every die, if they all agree.
    pub fn uniform_sides(&self) -> Option<usize> {
        let first = self.dice.first()?.sides();
        self.dice
            .iter()
            .all(|d| d.sides() == first)
            .then_some(first)
    }
}

impl TryFrom<Vec<Die>> for DiceSet {
    type Error = DiceError;

    fn try_from(dice: Vec<Die>) -> Result<Self, Self::Error> {
        Self::new(dice)
    }
}

impl From<DiceSet> for Vec<Die> {
    fn from(set: DiceSet) -> Self {
        set.dice
    }
}

impl<'a> IntoIterator for &'a DiceSet {
    type Item = &'a Die;
    type IntoIter = std::slice::Iter<'a, Die>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
