use nav_types::{AdminAuth, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Lowercase hex SHA-256 of the plaintext password.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Compare two digests without leaking where they first differ.
///
/// Digests of different length compare unequal.
pub fn digests_match(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Check a plaintext password against a stored digest.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    digests_match(&hash_password(password), stored_hash)
}

/// The built-in identity used when a dataset has none.
pub fn default_admin() -> AdminAuth {
    AdminAuth::new(DEFAULT_ADMIN_USERNAME, hash_password(DEFAULT_ADMIN_PASSWORD))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_sha256_hex() {
        assert_eq!(
            hash_password("admin"),
            "8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918"
        );
        assert_eq!(
            hash_password(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(hash_password("hunter2"), hash_password("hunter2"));
        assert_ne!(hash_password("hunter2"), hash_password("hunter3"));
    }

    #[test]
    fn verify_accepts_matching_password() {
        let stored = hash_password("s3cret");
        assert!(verify_password("s3cret", &stored));
        assert!(!verify_password("s3cret ", &stored));
        assert!(!verify_password("", &stored));
    }

    #[test]
    fn digests_of_different_length_never_match() {
        assert!(!digests_match("abc", "abcd"));
        assert!(!digests_match("", "a"));
        assert!(digests_match("", ""));
    }

    #[test]
    fn default_admin_uses_admin_admin() {
        let admin = default_admin();
        assert_eq!(admin.username, "admin");
        assert!(verify_password("admin", &admin.password_hash));
        assert!(admin.is_complete());
    }
}
