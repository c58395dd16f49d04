//! Provably fair random draws between two parties.
//!
//! The computer commits to a secret value with HMAC-SHA3-256 before the user
//! contributes; the reveal lets the user check the computer never changed
//! its value. The combined result is `(computer + user) mod range`.

pub mod commitment;
pub mod entropy;
pub mod error;
pub mod fair;

pub use commitment::{Commitment, KEY_LEN, SecretKey};
pub use entropy::{OsRandom, SecureRandomSource, SeededRandom, uniform_below};
pub use error::{FairError, FairResult};
pub use fair::{FairRandomValue, Reveal, combine, verify_reveal};
