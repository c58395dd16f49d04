use colored::Colorize;

use fd_protocol::{Commitment, FairError, SecretKey, verify_reveal};

pub fn run(hmac: &str, key: &str, value: u32, range: Option<u32>) -> Result<(), String> {
    let commitment = Commitment::from_hex(hmac).map_err(|e| format!("bad --hmac: {e}"))?;
    let key = SecretKey::from_hex(key).map_err(|e| format!("bad --key: {e}"))?;

    let verified = match range {
        Some(range) => verify_reveal(&commitment, &key, value, range).map_err(|e| e.to_string()),
        None if commitment.verify(&key, value) => Ok(()),
        None => Err(FairError::CommitmentMismatch.to_string()),
    };
    verified.map_err(|e| format!("verification failed: {e}"))?;

    println!(
        "  {} HMAC-SHA3-256(KEY, \"{value}\") = {commitment}",
        "Verified".green().bold()
    );
    Ok(())
}
