//! Final result of a game.

use crate::phase::Party;

/// Who won, decided by comparing the two rolled faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The user's face was higher.
    UserWins,
    /// The computer's face was higher.
    ComputerWins,
    /// Both faces were equal.
    Draw,
}

impl Outcome {
    /// Compare the user's face with the computer's.
    pub fn compare(user_face: i64, computer_face: i64) -> Self {
        match user_face.cmp(&computer_face) {
            std::cmp::Ordering::Greater => Self::UserWins,
            std::cmp::Ordering::Less => Self::ComputerWins,
            std::cmp::Ordering::Equal => Self::Draw,
        }
    }

    /// The winning party, if any.
    pub fn winner(self) -> Option<Party> {
        match self {
            Self::UserWins => Some(Party::User),
            Self::ComputerWins => Some(Party::Computer),
            Self::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserWins => write!(f, "You win!"),
            Self::ComputerWins => write!(f, "Computer wins!"),
            Self::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// Everything decided during one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    /// The party that selected a die first.
    pub first_mover: Party,
    /// 0-based index of the user's die.
    pub user_die: usize,
    /// 0-based index of the computer's die.
    pub computer_die: usize,
    /// Face rolled by the user's die.
    pub user_roll: i64,
    /// Face rolled by the computer's die.
    pub computer_roll: i64,
    /// The result.
    pub outcome: Outcome,
}
