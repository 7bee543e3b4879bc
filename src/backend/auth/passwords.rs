//! Password hashing
//!
//! bcrypt is deliberately slow, so both hashing and verification run on the
//! blocking thread pool instead of the async executor.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("password task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Hash a password with the given bcrypt cost
pub async fn hash_password(password: String, cost: u32) -> Result<String, PasswordError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hash)
}

/// Check a password against a stored bcrypt hash
pub async fn verify_password(password: String, hash: String) -> Result<bool, PasswordError> {
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    #[tokio::test]
    async fn test_hash_never_equals_plaintext() {
        let hash = hash_password("verysecret".to_string(), TEST_COST).await.unwrap();
        assert_ne!(hash, "verysecret");
        assert!(hash.starts_with("$2"));
    }

    #[tokio::test]
    async fn test_same_password_gets_different_salts() {
        let first = hash_password("verysecret".to_string(), TEST_COST).await.unwrap();
        let second = hash_password("verysecret".to_string(), TEST_COST).await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_verify() {
        let hash = hash_password("verysecret".to_string(), TEST_COST).await.unwrap();
        assert!(verify_password("verysecret".to_string(), hash.clone()).await.unwrap());
        assert!(!verify_password("wrongpassword".to_string(), hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_against_garbage_hash_is_an_error() {
        let result = verify_password("verysecret".to_string(), "not-a-hash".to_string()).await;
        assert!(matches!(result, Err(PasswordError::Bcrypt(_))));
    }

    #[tokio::test]
    async fn test_invalid_cost_is_an_error() {
        let result = hash_password("verysecret".to_string(), 2).await;
        assert!(matches!(result, Err(PasswordError::Bcrypt(_))));
    }
}
