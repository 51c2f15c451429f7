use std::fmt;

/// Number of random bytes behind each session token.
pub const TOKEN_BYTES: usize = 32;

/// Opaque session token handed to the client in a cookie.
///
/// Tokens are 32 bytes from the thread-local CSPRNG, hex-encoded. Collisions
/// are not checked; the space is large enough that they do not happen.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generate a fresh random token.
    pub fn generate() -> Self {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::Rng::fill(&mut rand::thread_rng(), &mut bytes);
        Self(hex::encode(bytes))
    }

    /// Wrap a token presented by a client.
    pub fn from_client(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First 8 characters, safe to put in logs.
    pub fn short(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(8)
            .map_or(self.0.len(), |(idx, _)| idx);
        &self.0[..end]
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken({}…)", self.short())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tokens_are_hex_of_expected_length() {
        let token = SessionToken::generate();
        assert_eq!(token.as_str().len(), TOKEN_BYTES * 2);
        assert!(token.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_tokens_differ() {
        assert_ne!(SessionToken::generate(), SessionToken::generate());
    }

    #[test]
    fn short_prefix() {
        let token = SessionToken::from_client("0123456789abcdef");
        assert_eq!(token.short(), "01234567");
        assert_eq!(SessionToken::from_client("abc").short(), "abc");
    }

    #[test]
    fn debug_does_not_leak_full_token() {
        let token = SessionToken::from_client("0123456789abcdef");
        let rendered = format!("{token:?}");
        assert!(rendered.contains("01234567"));
        assert!(!rendered.contains("89abcdef"));
    }

    #[test]
    fn empty_token() {
        assert!(SessionToken::from_client("").is_empty());
        assert!(!SessionToken::generate().is_empty());
    }
}
