//! Commit-reveal fair random draws.
//!
//! One draw produces a value in `[0, range)` that neither party controls:
//!
//! 1. The computer draws a secret key and a uniform value, and publishes
//!    only the commitment digest.
//! 2. The user picks a value in `[0, range)` without seeing the computer's.
//! 3. The computer reveals its value and key; the digest is re-checked.
//! 4. The result is `(computer + user) mod range`.
//!
//! If either contribution is uniform and independent of the other, the
//! result is uniform, however the user picks.

use tracing::debug;

use crate::commitment::{Commitment, SecretKey};
use crate::entropy::{SecureRandomSource, uniform_below};
use crate::error::{FairError, FairResult};

/// A single-use commit-reveal draw.
///
/// The committed value and key stay private until [`reveal`](Self::reveal),
/// which consumes the draw.
pub struct FairRandomValue {
    range: u32,
    key: SecretKey,
    value: u32,
    commitment: Commitment,
}

impl FairRandomValue {
    /// Draw a key and a value in `[0, range)` and commit to them.
    pub fn new<R: SecureRandomSource + ?Sized>(range: u32, source: &mut R) -> FairResult<Self> {
        if range < 2 {
            return Err(FairError::InvalidRange(range));
        }
        let key = SecretKey::generate(source)?;
        let value = uniform_below(source, range)?;
        let commitment = Commitment::compute(&key, value);
        // The value and key must not appear in logs before the reveal.
        debug!(range, hmac = %commitment, "committed to fair draw");
        Ok(Self {
            range,
            key,
            value,
            commitment,
        })
    }

    /// The exclusive upper bound of the draw.
    pub fn range(&self) -> u32 {
        self.range
    }

    /// The digest to publish before asking for the user's value.
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// Check a user value without consuming the draw.
    pub fn check_user_value(&self, user_value: u32) -> FairResult<()> {
        if user_value >= self.range {
            return Err(FairError::ValueOutOfRange {
                value: user_value,
                range: self.range,
            });
        }
        Ok(())
    }

    /// Reveal the computer's value and key and combine with `user_value`.
    pub fn reveal(self, user_value: u32) -> FairResult<Reveal> {
        self.check_user_value(user_value)?;
        if !self.commitment.verify(&self.key, self.value) {
            return Err(FairError::CommitmentMismatch);
        }
        let result = combine(self.value, user_value, self.range);
        debug!(
            range = self.range,
            computer = self.value,
            user = user_value,
            result,
            "revealed fair draw"
        );
        Ok(Reveal {
            range: self.range,
            computer_value: self.value,
            user_value,
            key: self.key,
            result,
        })
    }
}

impl std::fmt::Debug for FairRandomValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FairRandomValue")
            .field("range", &self.range)
            .field("commitment", &self.commitment)
            .finish_non_exhaustive()
    }
}

/// Combine both contributions: `(computer + user) mod range`.
pub fn combine(computer: u32, user: u32, range: u32) -> u32 {
    ((u64::from(computer) + u64::from(user)) % u64::from(range)) as u32
}

/// Everything disclosed when a draw is revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    range: u32,
    computer_value: u32,
    user_value: u32,
    key: SecretKey,
    result: u32,
}

impl Reveal {
    /// The exclusive upper bound of the draw.
    pub fn range(&self) -> u32 {
        self.range
    }

    /// The value the computer committed to.
    pub fn computer_value(&self) -> u32 {
        self.computer_value
    }

    /// The value the user supplied.
    pub fn user_value(&self) -> u32 {
        self.user_value
    }

    /// The key the commitment was made under.
    pub fn key(&self) -> &SecretKey {
        &self.key
    }

    /// The combined result in `[0, range)`.
    pub fn result(&self) -> u32 {
        self.result
    }

    /// Re-check this transcript against a commitment published earlier.
    pub fn verify(&self, commitment: &Commitment) -> FairResult<()> {
        verify_reveal(commitment, &self.key, self.computer_value, self.range)?;
        if self.result != combine(self.computer_value, self.user_value, self.range) {
            return Err(FairError::CommitmentMismatch);
        }
        Ok(())
    }
}

/// Verify a revealed `(key, value)` pair against a published commitment.
pub fn verify_reveal(
    commitment: &Commitment,
    key: &SecretKey,
    value: u32,
    range: u32,
) -> FairResult<()> {
    if value >= range {
        return Err(FairError::ValueOutOfRange { value, range });
    }
    if commitment.verify(key, value) {
        Ok(())
    } else {
        Err(FairError::CommitmentMismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::SeededRandom;
    use proptest::prelude::*;

    #[test]
    fn range_below_two_rejected() {
        let mut src = SeededRandom::new(1);
        assert_eq!(
            FairRandomValue::new(1, &mut src).unwrap_err(),
            FairError::InvalidRange(1)
        );
        assert!(FairRandomValue::new(0, &mut src).is_err());
    }

    #[test]
    fn out_of_range_user_value_keeps_draw_usable() {
        let mut src = SeededRandom::new(1);
        let draw = FairRandomValue::new(6, &mut src).unwrap();
        assert_eq!(
            draw.check_user_value(6),
            Err(FairError::ValueOutOfRange { value: 6, range: 6 })
        );
        assert!(draw.check_user_value(5).is_ok());
        assert!(draw.reveal(5).is_ok());
    }

    #[test]
    fn reveal_rejects_out_of_range() {
        let mut src = SeededRandom::new(1);
        let draw = FairRandomValue::new(2, &mut src).unwrap();
        assert!(matches!(
            draw.reveal(2),
            Err(FairError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn reveal_matches_published_commitment() {
        let mut src = SeededRandom::new(11);
        let draw = FairRandomValue::new(6, &mut src).unwrap();
        let published = *draw.commitment();
        let reveal = draw.reveal(3).unwrap();
        assert!(reveal.verify(&published).is_ok());
        assert_eq!(
            reveal.result(),
            (reveal.computer_value() + 3) % 6
        );
    }

    #[test]
    fn reveal_against_other_commitment_fails() {
        let mut src = SeededRandom::new(11);
        let first = FairRandomValue::new(6, &mut src).unwrap();
        let second = FairRandomValue::new(6, &mut src).unwrap();
        let other = *second.commitment();
        let reveal = first.reveal(0).unwrap();
        assert_eq!(
            reveal.verify(&other),
            Err(FairError::CommitmentMismatch)
        );
    }

    #[test]
    fn tampered_value_fails_verification() {
        let mut src = SeededRandom::new(4);
        let draw = FairRandomValue::new(100, &mut src).unwrap();
        let published = *draw.commitment();
        let reveal = draw.reveal(0).unwrap();
        let forged = (reveal.computer_value() + 1) % 100;
        assert_eq!(
            verify_reveal(&published, reveal.key(), forged, 100),
            Err(FairError::CommitmentMismatch)
        );
    }

    #[test]
    fn identical_seeds_identical_digests() {
        let a = FairRandomValue::new(6, &mut SeededRandom::new(99)).unwrap();
        let b = FairRandomValue::new(6, &mut SeededRandom::new(99)).unwrap();
        assert_eq!(a.commitment(), b.commitment());
        assert_eq!(a.reveal(1).unwrap(), b.reveal(1).unwrap());
    }

    #[test]
    fn fresh_key_per_draw() {
        let mut src = SeededRandom::new(5);
        let a = FairRandomValue::new(6, &mut src).unwrap().reveal(0).unwrap();
        let b = FairRandomValue::new(6, &mut src).unwrap().reveal(0).unwrap();
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn combine_is_additive_mod_range() {
        assert_eq!(combine(4, 5, 6), 3);
        assert_eq!(combine(0, 0, 2), 0);
        assert_eq!(combine(1, 1, 2), 0);
        assert_eq!(combine(u32::MAX - 1, u32::MAX - 1, u32::MAX), u32::MAX - 2);
    }

    #[test]
    fn combine_is_uniform_for_any_fixed_user_value() {
        // A biased user always answering 0 cannot skew the result.
        const RANGE: u32 = 4;
        const TRIALS: usize = 40_000;
        let mut src = SeededRandom::new(31);
        let mut counts = [0usize; RANGE as usize];
        for _ in 0..TRIALS {
            let draw = FairRandomValue::new(RANGE, &mut src).unwrap();
            counts[draw.reveal(0).unwrap().result() as usize] += 1;
        }
        let expected = TRIALS as f64 / f64::from(RANGE);
        let chi_square: f64 = counts
            .iter()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum();
        // 3 degrees of freedom; p = 0.0001 is about 21.1.
        assert!(chi_square < 21.1, "chi-square {chi_square} for {counts:?}");
    }

    proptest! {
        #[test]
        fn result_always_in_range(range in 2u32..=u32::MAX, user in any::<u32>(), seed in any::<u64>()) {
            let user = user % range;
            let draw = FairRandomValue::new(range, &mut SeededRandom::new(seed)).unwrap();
            let published = *draw.commitment();
            let reveal = draw.reveal(user).unwrap();
            prop_assert!(reveal.result() < range);
            prop_assert!(reveal.computer_value() < range);
            prop_assert!(published.verify(reveal.key(), reveal.computer_value()));
        }
    }
}
