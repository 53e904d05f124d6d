//! Credential lifecycle: hashing, verification, and password transitions
//!
//! Hashes are Argon2id PHC strings. Verification is delegated to the
//! hashing library, which compares in constant time; stored hashes are
//! never compared with naive equality. A user with no hash is in a valid
//! "no password" state, and any login input (including empty) passes.

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use argon2::password_hash::SaltString;
use rand::rngs::OsRng;

use crate::domain::result::{Error, Result};
use crate::domain::user::UserRecord;

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::other(format!("password hashing failed: {e}")))
}

/// Verify a password against a stored PHC hash string
pub fn verify_password(hash: &str, password: &str) -> Result<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| Error::other(format!("stored password hash is invalid: {e}")))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(Error::other(format!("password verification failed: {e}"))),
    }
}

/// Check a login attempt against a record. With no stored hash any input
/// succeeds; otherwise the input must verify.
pub fn verify_login(record: &UserRecord, password: &str) -> Result<bool> {
    match &record.password_hash {
        None => Ok(true),
        Some(hash) => verify_password(hash, password),
    }
}

/// Set an initial password or change an existing one.
///
/// When a hash exists the old password must verify first; the
/// confirmation must match the new password. Failures leave the record
/// untouched. When no hash exists the old password is not checked.
pub fn change_password(
    record: &mut UserRecord,
    old_password: &str,
    new_password: &str,
    confirm_password: &str,
) -> Result<()> {
    if let Some(hash) = &record.password_hash {
        if !verify_password(hash, old_password)? {
            return Err(Error::IncorrectOldPassword);
        }
    }
    if new_password != confirm_password {
        return Err(Error::PasswordMismatch);
    }
    record.password_hash = Some(hash_password(new_password)?);
    Ok(())
}

/// Clear the password, returning to the "no password" state.
///
/// Requires a hash to exist and the old password to verify; never
/// silently succeeds when no password is set.
pub fn remove_password(record: &mut UserRecord, old_password: &str) -> Result<()> {
    let Some(hash) = &record.password_hash else {
        return Err(Error::NoPasswordSet);
    };
    if !verify_password(hash, old_password)? {
        return Err(Error::IncorrectPassword);
    }
    record.password_hash = None;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_password("hunter2").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password(&hash, "hunter2").unwrap());
        assert!(!verify_password(&hash, "hunter3").unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("hunter2").unwrap();
        let b = hash_password("hunter2").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_login_with_no_password_set_accepts_anything() {
        let record = UserRecord::new(None);
        assert!(verify_login(&record, "").unwrap());
        assert!(verify_login(&record, "whatever").unwrap());
    }

    #[test]
    fn test_set_initial_password_skips_old_check() {
        let mut record = UserRecord::new(None);
        change_password(&mut record, "ignored", "secret", "secret").unwrap();
        assert!(verify_login(&record, "secret").unwrap());
        assert!(!verify_login(&record, "ignored").unwrap());
    }

    #[test]
    fn test_change_password_requires_old() {
        let mut record = UserRecord::new(Some(hash_password("old-pw").unwrap()));
        assert!(matches!(
            change_password(&mut record, "wrong", "new-pw", "new-pw"),
            Err(Error::IncorrectOldPassword)
        ));
        assert!(verify_login(&record, "old-pw").unwrap());

        change_password(&mut record, "old-pw", "new-pw", "new-pw").unwrap();
        assert!(verify_login(&record, "new-pw").unwrap());
    }

    #[test]
    fn test_mismatched_confirmation_never_mutates() {
        let original = hash_password("old-pw").unwrap();
        let mut record = UserRecord::new(Some(original.clone()));
        assert!(matches!(
            change_password(&mut record, "old-pw", "new-pw", "typo"),
            Err(Error::PasswordMismatch)
        ));
        assert_eq!(record.password_hash, Some(original));
    }

    #[test]
    fn test_remove_password() {
        let mut record = UserRecord::new(Some(hash_password("old-pw").unwrap()));
        assert!(matches!(
            remove_password(&mut record, "wrong"),
            Err(Error::IncorrectPassword)
        ));
        assert!(record.password_hash.is_some());

        remove_password(&mut record, "old-pw").unwrap();
        assert!(record.password_hash.is_none());
    }

    #[test]
    fn test_remove_password_without_one_is_an_error() {
        let mut record = UserRecord::new(None);
        assert!(matches!(
            remove_password(&mut record, ""),
            Err(Error::NoPasswordSet)
        ));
    }
}
