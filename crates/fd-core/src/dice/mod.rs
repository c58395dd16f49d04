//! Dice with arbitrary integer faces.
//!
//! A die is an ordered list of face values fixed at construction. Faces may
//! repeat and need not be positive, which is what makes non-transitive sets
//! like `2,2,4,4,9,9` / `1,1,6,6,8,8` / `3,3,5,5,7,7` possible.

pub mod set;

pub use set::DiceSet;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

/// Smallest number of faces any die may have.
pub const MIN_SIDES: usize = 2;

/// A die with an immutable, ordered list of integer faces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct Die {
    faces: Vec<i64>,
}

impl Die {
    /// Create a die from its faces.
    pub fn new(faces: Vec<i64>) -> DiceResult<Self> {
        if faces.len() < MIN_SIDES {
            return Err(DiceError::TooFewSides {
                die: None,
                found: faces.len(),
                min: MIN_SIDES,
            });
        }
        Ok(Self { faces })
    }

    /// Returns the number of sides on this die.
    pub fn sides(&self) -> usize {
        self.faces.len()
    }

    /// Returns the face at `index`.
    pub fn face(&self, index: usize) -> DiceResult<i64> {
        self.faces
            .get(index)
            .copied()
            .ok_or(DiceError::FaceOutOfRange {
                index,
                sides: self.sides(),
            })
    }

    /// All faces in construction order.
    pub fn faces(&self) -> &[i64] {
        &self.faces
    }
}

impl FromStr for Die {
    type Err = DiceError;

    /// Parse a comma-separated face list such as `"1,1,6,6,8,8"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let faces = s
            .split(',')
            .map(|token| {
                let token = token.trim();
                token.parse::<i64>().map_err(|_| DiceError::NonIntegerFace {
                    die: None,
                    token: token.to_string(),
                })
            })
            .collect::<DiceResult<Vec<_>>>()?;
        Self::new(faces)
    }
}

impl TryFrom<Vec<i64>> for Die {
    type Error = DiceError;

    fn try_from(faces: Vec<i64>) -> Result<Self, Self::Error> {
        Self::new(faces)
    }
}

impl From<Die> for Vec<i64> {
    fn from(die: Die) -> Self {
        die.faces
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self.faces.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", faces.join(","))
    }
}
