//! Dice model for fairdice.
//!
//! Provides dice with arbitrary integer faces, ordered dice sets, the
//! validation policy used when dice come from user input, and the matrix of
//! pairwise win probabilities that exposes non-transitive cycles.

pub mod dice;
pub mod error;
pub mod matrix;
pub mod policy;

pub use dice::{DiceSet, Die, MIN_SIDES};
pub use error::{DiceError, DiceResult};
pub use matrix::ProbabilityMatrix;
pub use policy::{DicePolicy, read_specs};
