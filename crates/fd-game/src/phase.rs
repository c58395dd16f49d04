//! The fixed sequence of steps in one game.

/// One of the two parties at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Party {
    /// The human player.
    User,
    /// The program.
    Computer,
}

impl Party {
    /// The other party.
    pub fn other(self) -> Self {
        match self {
            Self::User => Self::Computer,
            Self::Computer => Self::User,
        }
    }
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Computer => write!(f, "computer"),
        }
    }
}

/// What a fair draw decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPurpose {
    /// Who selects a die first (range 2).
    FirstMove,
    /// The face of the user's die.
    UserRoll,
    /// The face of the computer's die.
    ComputerRoll,
}

impl std::fmt::Display for DrawPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FirstMove => write!(f, "first move"),
            Self::UserRoll => write!(f, "user roll"),
            Self::ComputerRoll => write!(f, "computer roll"),
        }
    }
}

/// A step of the game. Steps run strictly in declaration order.
///
/// Which party acts in the two selection steps depends on the first-move
/// draw; the order of steps does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    /// Fair draw deciding who selects first.
    DetermineFirstMover,
    /// Optional detour showing the probability table.
    OptionalHelp,
    /// The first mover selects a die.
    FirstSelection,
    /// The other party selects a die.
    SecondSelection,
    /// Fair draw for the user's die.
    RollUser,
    /// Fair draw for the computer's die.
    RollComputer,
    /// Compare the two faces.
    Resolve,
    /// The game is over.
    Done,
}

impl Phase {
    /// The step after this one. `Done` is terminal.
    pub fn next(self) -> Self {
        match self {
            Self::DetermineFirstMover => Self::OptionalHelp,
            Self::OptionalHelp => Self::FirstSelection,
            Self::FirstSelection => Self::SecondSelection,
            Self::SecondSelection => Self::RollUser,
            Self::RollUser => Self::RollComputer,
            Self::RollComputer => Self::Resolve,
            Self::Resolve | Self::Done => Self::Done,
        }
    }

    /// True once the game has finished.
    pub fn is_terminal(self) -> bool {
        self == Self::Done
    }
}
