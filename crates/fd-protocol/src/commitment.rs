//! Secret keys and HMAC-SHA3-256 commitments.
//!
//! A commitment binds the computer to a value without revealing it:
//! `digest = HMAC-SHA3-256(key, decimal(value))`. Publishing the digest
//! hides the value; revealing the key later lets anyone recompute it.

use std::fmt;

use hmac::{Hmac, Mac};
use sha3::Sha3_256;

use crate::entropy::SecureRandomSource;
use crate::error::{FairError, FairResult};

type HmacSha3_256 = Hmac<Sha3_256>;

/// Length in bytes of keys and digests.
pub const KEY_LEN: usize = 32;

/// A 256-bit secret key used for one commitment.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; KEY_LEN]);

impl SecretKey {
    /// Draw a fresh key from `source`.
    pub fn generate<R: SecureRandomSource + ?Sized>(source: &mut R) -> FairResult<Self> {
        let mut bytes = [0u8; KEY_LEN];
        source.next_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Decode from 64 hex characters.
    pub fn from_hex(s: &str) -> FairResult<Self> {
        decode_32(s).map(Self)
    }

    /// Get the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex encoding (64 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({}..)", hex::encode(&self.0[..4]))
    }
}

/// A published HMAC-SHA3-256 digest binding a key to a value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Commitment([u8; KEY_LEN]);

impl Commitment {
    /// Commit to `value` under `key`.
    pub fn compute(key: &SecretKey, value: u32) -> Self {
        Self(mac(key, value).finalize().into_bytes().into())
    }

    /// Decode from 64 hex characters.
    pub fn from_hex(s: &str) -> FairResult<Self> {
        decode_32(s).map(Self)
    }

    /// Get the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Check in constant time that `key` and `value` reproduce this digest.
    pub fn verify(&self, key: &SecretKey, value: u32) -> bool {
        mac(key, value).verify_slice(&self.0).is_ok()
    }
}

fn mac(key: &SecretKey, value: u32) -> HmacSha3_256 {
    let mut mac = <HmacSha3_256 as Mac>::new_from_slice(key.as_bytes())
        .unwrap_or_else(|_| unreachable!("HMAC accepts keys of any length"));
    mac.update(value.to_string().as_bytes());
    mac
}

fn decode_32(s: &str) -> FairResult<[u8; KEY_LEN]> {
    let mut bytes = [0u8; KEY_LEN];
    hex::decode_to_slice(s.trim(), &mut bytes).map_err(|e| FairError::MalformedHex(e.to_string()))?;
    Ok(bytes)
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::SeededRandom;

    fn key(seed: u64) -> SecretKey {
        SecretKey::generate(&mut SeededRandom::new(seed)).unwrap()
    }

    #[test]
    fn commitment_verification() {
        let k = key(1);
        let c = Commitment::compute(&k, 4);
        assert!(c.verify(&k, 4));
    }

    #[test]
    fn wrong_value_fails_verification() {
        let k = key(1);
        let c = Commitment::compute(&k, 4);
        assert!(!c.verify(&k, 5));
    }

    #[test]
    fn wrong_key_fails_verification() {
        let c = Commitment::compute(&key(1), 4);
        assert!(!c.verify(&key(2), 4));
    }

    #[test]
    fn same_inputs_same_digest() {
        assert_eq!(
            Commitment::compute(&key(9), 3),
            Commitment::compute(&key(9), 3)
        );
    }

    #[test]
    fn digest_is_hmac_over_decimal_string() {
        let k = key(3);
        let mut expected = <HmacSha3_256 as Mac>::new_from_slice(k.as_bytes()).unwrap();
        expected.update(b"17");
        let expected: [u8; KEY_LEN] = expected.finalize().into_bytes().into();
        assert_eq!(Commitment::compute(&k, 17).as_bytes(), &expected);
    }

    #[test]
    fn hex_encoding() {
        let k = key(5);
        let c = Commitment::compute(&k, 0);
        let text = c.to_string();
        assert_eq!(text.len(), 64);
        assert!(text.chars().all(|ch| matches!(ch, '0'..='9' | 'a'..='f')));
        assert_eq!(Commitment::from_hex(&text).unwrap(), c);
        assert_eq!(SecretKey::from_hex(&k.to_hex()).unwrap(), k);
    }

    #[test]
    fn malformed_hex_rejected() {
        assert!(matches!(
            SecretKey::from_hex("abc"),
            Err(FairError::MalformedHex(_))
        ));
        assert!(Commitment::from_hex(&"zz".repeat(32)).is_err());
    }

    #[test]
    fn debug_does_not_leak_full_key() {
        let k = SecretKey::from_bytes([0xab; KEY_LEN]);
        assert_eq!(format!("{k:?}"), "SecretKey(abababab..)");
    }
}
