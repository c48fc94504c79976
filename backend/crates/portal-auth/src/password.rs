//! Argon2 password hashing

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;
use std::sync::OnceLock;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use error_location::ErrorLocation;
use rand_core::OsRng;

/// Hash a plaintext password into a PHC string with a fresh random salt
#[track_caller]
pub fn hash_password(plain: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Verify a plaintext password against a stored PHC string.
///
/// An unparseable stored hash never verifies.
pub fn verify_password(plain: &str, phc: &str) -> bool {
    let parsed = match PasswordHash::new(phc) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::error!("Stored password hash is not a valid PHC string: {}", e);
            return false;
        }
    };

    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}

/// Burn one verification against a throwaway hash.
///
/// Used when the account does not exist so that the response time does not
/// reveal whether the email is registered.
pub fn verify_against_dummy(plain: &str) {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

    let dummy = DUMMY_HASH.get_or_init(|| hash_password("portal-timing-equalizer").ok());
    if let Some(phc) = dummy {
        let _ = verify_password(plain, phc);
    }
}
