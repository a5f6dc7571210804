//! Password hashing for seeded users.
//!
//! Hashes are Argon2id PHC strings (`$argon2id$v=19$...`) with a random salt.

use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use rand::rngs::OsRng;

use crate::error::AppError;

/// Hash a clear-text password on the blocking thread pool.
///
/// Argon2 is deliberately slow and memory-hard, so it must not run on an
/// async worker thread.
pub async fn hash_password(plain: String) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || hash_password_blocking(&plain)).await??;
    Ok(hash)
}

fn hash_password_blocking(plain: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(plain.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::{PasswordHash, PasswordVerifier};

    fn verifies(plain: &str, hash: &str) -> bool {
        let parsed = PasswordHash::new(hash).unwrap();
        Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok()
    }

    #[tokio::test]
    async fn hash_verifies_against_clear_text_password() {
        let hash = hash_password("123456".to_string()).await.unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verifies("123456", &hash));
        assert!(!verifies("654321", &hash));
    }

    #[tokio::test]
    async fn same_password_gets_distinct_salts() {
        let first = hash_password("123456".to_string()).await.unwrap();
        let second = hash_password("123456".to_string()).await.unwrap();
        assert_ne!(first, second);
    }
}
