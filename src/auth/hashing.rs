// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Password hashing and verification.
//!
//! Passwords are stored as the Base64 encoding of their SHA-256 digest.
//! The transform is deterministic, so verification is re-hash-and-compare
//! against the stored digest. The plaintext is never persisted.

use base64ct::{Base64, Encoding};
use sha2::{Digest, Sha256};

/// Hash a plaintext password into its storable digest.
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    Base64::encode_string(&digest)
}

/// Verify a plaintext password against a stored digest.
///
/// A stored value that does not decode as Base64 can never match.
pub fn verify_password(password: &str, stored_digest: &str) -> bool {
    let recomputed = Sha256::digest(password.as_bytes());
    match Base64::decode_vec(stored_digest) {
        Ok(stored) => stored.as_slice() == recomputed.as_slice(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trips() {
        let digest = hash_password("password123");
        assert!(verify_password("password123", &digest));
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let digest = hash_password("password123");
        assert!(!verify_password("password124", &digest));
        assert!(!verify_password("", &digest));
    }

    #[test]
    fn hashing_is_deterministic() {
        assert_eq!(hash_password("secret"), hash_password("secret"));
        assert_ne!(hash_password("secret"), hash_password("secret2"));
    }

    #[test]
    fn digest_is_base64_of_fixed_length() {
        // SHA-256 is 32 bytes, 44 characters once Base64-encoded.
        let digest = hash_password("anything");
        assert_eq!(digest.len(), 44);
        assert_ne!(digest, "anything");
        assert!(Base64::decode_vec(&digest).is_ok());
    }

    #[test]
    fn garbage_stored_digest_never_matches() {
        assert!(!verify_password("password123", "not base64 at all!"));
        assert!(!verify_password("password123", ""));
    }
}
