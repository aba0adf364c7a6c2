//! Password hashing with Argon2id.
//!
//! Hashes are stored as self-describing PHC strings
//! (`$argon2id$v=19$m=...,t=...,p=...$<salt>$<hash>`), so the parameters and
//! salt travel with the digest and can be tuned later without breaking
//! existing credentials.

use argon2::{
    Argon2,
    password_hash::{
        self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use std::sync::LazyLock;

use crate::errors::AuthError;

// Hashed on first use with the same parameters as real credentials.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("chirpy-no-such-account").ok());

/// Hashes `password` with a fresh random salt.
///
/// The empty string is a valid input. Fails only when the salt cannot be
/// generated or the hasher reports an internal error.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Checks `password` against a stored PHC hash.
///
/// Returns `Ok(false)` on mismatch. A hash that cannot be parsed, or that
/// names an algorithm other than Argon2, is an error rather than a mismatch.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|e| AuthError::Hashing(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::Hashing(e.to_string())),
    }
}

/// Verifies `password` against a throwaway hash and discards the outcome.
///
/// Login calls this when no account matches the email, so that case costs
/// one Argon2 verification just like a wrong password. Returns whether a
/// verification actually ran.
pub fn verify_dummy_password(password: &str) -> bool {
    match DUMMY_HASH.as_deref() {
        Some(hash) => {
            let _ = verify_password(password, hash);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_phc_argon2id() {
        let hash = hash_password("04234").unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_round_trip() {
        let hash = hash_password("04234").unwrap();
        assert!(verify_password("04234", &hash).unwrap());
        assert!(!verify_password("04235", &hash).unwrap());
    }

    #[test]
    fn test_same_password_gets_different_salts() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_unparseable_hash_is_error() {
        let result = verify_password("whatever", "plain-text-not-a-hash");
        assert!(matches!(result, Err(AuthError::Hashing(_))));
    }

    #[test]
    fn test_foreign_algorithm_is_error() {
        let bcrypt_like = "$pbkdf2-sha256$i=1000$c2FsdHNhbHQ$aGFzaGhhc2hoYXNoaGFzaA";
        assert!(verify_password("pw", bcrypt_like).is_err());
    }

    #[test]
    fn test_dummy_verification_runs_argon2() {
        assert!(verify_dummy_password("anything"));
        let hash = DUMMY_HASH.as_deref().unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(!verify_password("anything", hash).unwrap());
    }
}
