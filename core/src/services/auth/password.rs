//! bcrypt password hashing helpers

use crate::errors::{DomainError, DomainResult};

/// Hash a plaintext password with the given bcrypt cost
pub fn hash_password(password: &str, cost: u32) -> DomainResult<String> {
    bcrypt::hash(password, cost).map_err(|e| DomainError::Internal {
        message: format!("Password hashing failed: {}", e),
    })
}

/// Verify a plaintext password against a stored bcrypt hash
pub fn verify_password(password: &str, hash: &str) -> DomainResult<bool> {
    bcrypt::verify(password, hash).map_err(|e| DomainError::Internal {
        message: format!("Password verification failed: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum cost keeps the test fast
    const TEST_COST: u32 = 4;

    #[test]
    fn hash_then_verify_round_trips() {
        let hash = hash_password("hunter22", TEST_COST).unwrap();
        assert!(verify_password("hunter22", &hash).unwrap());
        assert!(!verify_password("hunter23", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_internal_error() {
        let result = verify_password("hunter22", "not-a-bcrypt-hash");
        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }
}
