//! Error types for dice construction and lookup.

/// Errors that can occur while building or indexing dice.
///
/// Variants fall into two families: validation errors (a malformed die or
/// dice set, reported before any game starts) and index errors (a lookup
/// outside the available faces or dice).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// A face token could not be parsed as an integer.
    #[error("{}: '{token}' is not an integer face", die_label(.die))]
    NonIntegerFace {
        /// 1-based position of the die in its specification list, if known.
        die: Option<usize>,
        /// The offending token.
        token: String,
    },

    /// A die has fewer faces than the active policy allows.
    #[error("{} has {found} face(s), at least {min} required", die_label(.die))]
    TooFewSides {
        /// 1-based position of the die in its specification list, if known.
        die: Option<usize>,
        /// Number of faces found.
        found: usize,
        /// Minimum number of faces.
        min: usize,
    },

    /// Dice in one set disagree on their side count.
    #[error("die {die} has {found} sides, expected {expected} like die 1")]
    MixedSides {
        /// 1-based position of the first die that disagrees.
        die: usize,
        /// Side count of the first die.
        expected: usize,
        /// Side count of the disagreeing die.
        found: usize,
    },

    /// Fewer dice were supplied than required.
    #[error("at least {min} dice required, got {found}")]
    TooFewDice {
        /// Number of dice supplied.
        found: usize,
        /// Minimum number of dice.
        min: usize,
    },

    /// A dice set was built from no dice at all.
    #[error("a dice set needs at least one die")]
    EmptySet,

    /// A face index is outside the die.
    #[error("face {index} out of range for a {sides}-sided die")]
    FaceOutOfRange {
        /// Requested 0-based face index.
        index: usize,
        /// Number of sides on the die.
        sides: usize,
    },

    /// A die index is outside the dice set.
    #[error("die {index} out of range, set has {count} dice")]
    DieOutOfRange {
        /// Requested 0-based die index.
        index: usize,
        /// Number of dice in the set.
        count: usize,
    },
}

impl DiceError {
    /// Returns true for lookup failures rather than malformed input.
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::FaceOutOfRange { .. } | Self::DieOutOfRange { .. })
    }

    /// Re-tag a validation error with the 1-based position of its die.
    pub(crate) fn at_die(self, position: usize) -> Self {
        match self {
            Self::NonIntegerFace { token, .. } => Self::NonIntegerFace {
                die: Some(position),
                token,
            },
            Self::TooFewSides { found, min, .. } => Self::TooFewSides {
                die: Some(position),
                found,
                min,
            },
            other => other,
        }
    }
}

fn die_label(die: &Option<usize>) -> String {
    match die {
        Some(position) => format!("die {position}"),
        None => "a die".to_string(),
    }
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
