//! Sources of secure random bytes.
//!
//! Draws never reach for a global generator: the source is passed in, so
//! production code uses the operating system while tests substitute a
//! seeded or scripted source.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng, TryRngCore};

use crate::error::{FairError, FairResult};

/// A supplier of cryptographically secure random bytes.
pub trait SecureRandomSource {
    /// Fill `buf` entirely with random bytes.
    fn next_bytes(&mut self, buf: &mut [u8]) -> FairResult<()>;
}

impl<T: SecureRandomSource + ?Sized> SecureRandomSource for &mut T {
    fn next_bytes(&mut self, buf: &mut [u8]) -> FairResult<()> {
        (**self).next_bytes(buf)
    }
}

/// The operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl SecureRandomSource for OsRandom {
    fn next_bytes(&mut self, buf: &mut [u8]) -> FairResult<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| FairError::Entropy(e.to_string()))
    }
}

/// A deterministic source for tests and replays.
///
/// Anyone who knows the seed can predict every draw. Never use it where
/// the counterpart must not see the computer's value in advance.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a source from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl SecureRandomSource for SeededRandom {
    fn next_bytes(&mut self, buf: &mut [u8]) -> FairResult<()> {
        self.rng.fill_bytes(buf);
        Ok(())
    }
}

/// Draw a uniformly distributed integer in `[0, range)` by rejection sampling.
///
/// Reads the fewest bytes that cover `range - 1`, interprets them as a
/// big-endian integer, and retries whenever the sample falls into the top
/// partial block that would make `sample % range` biased.
pub fn uniform_below<R: SecureRandomSource + ?Sized>(source: &mut R, range: u32) -> FairResult<u32> {
    if range < 2 {
        return Err(FairError::InvalidRange(range));
    }

    let width = byte_width(range - 1);
    let space: u64 = 1 << (8 * width);
    let limit = space - space % u64::from(range);

    let mut buf = [0u8; 4];
    let bytes = &mut buf[4 - width..];
    loop {
        source.next_bytes(bytes)?;
        let sample = bytes.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
        if sample < limit {
            return Ok((sample % u64::from(range)) as u32);
        }
    }
}

fn byte_width(max: u32) -> usize {
    let bits = (u32::BITS - max.leading_zeros()) as usize;
    bits.div_ceil(8).max(1)
}
