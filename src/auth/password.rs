//! Shared-password check for `/login`.
//!
//! The password is never stored in clear; configuration carries an argon2
//! PHC string (`$argon2id$...`), produced by `signboard --hash-password`.

use anyhow::{Result, anyhow};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hash a password for the `auth.password_hash` setting.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| anyhow!("Hashing failed: {}", e))
}

/// The configured shared password.
#[derive(Debug, Clone)]
pub struct SharedPassword {
    hash: Option<String>,
}

impl SharedPassword {
    /// Fails on a malformed hash so that a typo surfaces at startup rather
    /// than as a login that never succeeds.
    pub fn new(hash: Option<String>) -> Result<Self> {
        if let Some(ref h) = hash {
            PasswordHash::new(h).map_err(|e| anyhow!("Invalid password hash: {}", e))?;
        }
        Ok(Self { hash })
    }

    /// No password configured: every login attempt fails.
    pub fn disabled() -> Self {
        Self { hash: None }
    }

    pub fn is_configured(&self) -> bool {
        self.hash.is_some()
    }

    pub fn verify(&self, candidate: &str) -> bool {
        let Some(ref hash) = self.hash else {
            return false;
        };
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("letmein").unwrap();
        assert!(hash.starts_with("$argon2"));

        let pw = SharedPassword::new(Some(hash)).unwrap();
        assert!(pw.is_configured());
        assert!(pw.verify("letmein"));
        assert!(!pw.verify("letmeout"));
        assert!(!pw.verify(""));
    }

    #[test]
    fn test_disabled_rejects_everything() {
        let pw = SharedPassword::disabled();
        assert!(!pw.is_configured());
        assert!(!pw.verify(""));
        assert!(!pw.verify("anything"));
    }

    #[test]
    fn test_malformed_hash_rejected_at_construction() {
        assert!(SharedPassword::new(Some("hunter2".to_string())).is_err());
        assert!(SharedPassword::new(None).is_ok());
    }
}
