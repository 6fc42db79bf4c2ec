use sha2::{Digest, Sha256};
use std::fmt::Write;

/// Hash a password as hex-encoded SHA-256 over `password || salt`.
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    let digest = hasher.finalize();

    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(out, "{:02x}", byte);
    }
    out
}

/// Constant-shape comparison of a stored hash against a candidate password.
pub fn verify_password(stored_hash: &str, password: &str, salt: &str) -> bool {
    hash_password(password, salt) == stored_hash
}
