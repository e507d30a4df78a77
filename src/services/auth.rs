use sha2::{Digest, Sha256};

/// Hex SHA-256 digest of a password.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    hash_password(password) == stored_hash
}

/// Opaque token derived from the account identity. Deterministic for a
/// given (email, id) pair; there is no session state behind it.
pub fn issue_token(email: &str, user_id: i32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{}:{}", email, user_id).as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_is_hex_sha256() {
        let hash = hash_password("secret123");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(hash, hash_password("secret123"));
        assert_ne!(hash, hash_password("secret124"));
    }

    #[test]
    fn test_verify_password() {
        let stored = hash_password("secret123");
        assert!(verify_password("secret123", &stored));
        assert!(!verify_password("wrong", &stored));
    }

    #[test]
    fn test_issue_token_is_deterministic_per_identity() {
        let token = issue_token("login@example.com", 5);
        assert_eq!(token, issue_token("login@example.com", 5));
        assert_ne!(token, issue_token("login@example.com", 6));
        assert_ne!(token, issue_token("other@example.com", 5));
    }
}
