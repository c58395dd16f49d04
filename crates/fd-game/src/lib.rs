//! Non-transitive dice game built on commit-reveal fair draws.
//!
//! A game decides turn order with a fair draw, lets both parties pick dice,
//! rolls each die with its own fair draw, and compares the faces. All user
//! interaction goes through the [`Player`] trait.

pub mod config;
pub mod error;
pub mod game;
pub mod outcome;
pub mod phase;
pub mod player;

pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use game::Game;
pub use outcome::{GameReport, Outcome};
pub use phase::{DrawPurpose, Party, Phase};
pub use player::Player;
