//! Password hashing shared across Folio crates
//!
//! Passwords set through the admin flow are stored as
//! `sha256:hex(salt):hex(sha256(password || salt))`. The bootstrap default
//! password is stored as plaintext, so verification accepts both forms.
//! All comparisons are constant-time.

use sha2::{Digest, Sha256};

use crate::{Error, Result};

const HASH_SCHEME: &str = "sha256";
const SALT_LEN: usize = 16;

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let mut salt = [0u8; SALT_LEN];
    getrandom::getrandom(&mut salt)
        .map_err(|e| Error::Internal(format!("Failed to generate random bytes: {}", e)))?;

    Ok(hash_with_salt(password, &salt))
}

fn hash_with_salt(password: &str, salt: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt);
    let hash = hasher.finalize();

    format!("{}:{}:{}", HASH_SCHEME, hex::encode(salt), hex::encode(hash))
}

/// Whether a stored credential is a salted hash rather than plaintext
pub fn is_hashed(stored: &str) -> bool {
    stored
        .strip_prefix(HASH_SCHEME)
        .is_some_and(|rest| rest.starts_with(':'))
}

/// Verify a candidate password against a stored credential.
pub fn verify_password(candidate: &str, stored: &str) -> bool {
    if !is_hashed(stored) {
        return constant_time_eq(candidate.as_bytes(), stored.as_bytes());
    }

    // Parse stored hash: scheme:salt:hash
    let parts: Vec<&str> = stored.split(':').collect();
    if parts.len() != 3 {
        return false;
    }

    let salt = match hex::decode(parts[1]) {
        Ok(salt) => salt,
        Err(_) => return false,
    };

    let hash = match hex::decode(parts[2]) {
        Ok(hash) => hash,
        Err(_) => return false,
    };

    let mut hasher = Sha256::new();
    hasher.update(candidate.as_bytes());
    hasher.update(&salt);
    let candidate_hash = hasher.finalize();

    constant_time_eq(&hash, &candidate_hash)
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
