use std::collections::HashMap;

use chrono::{DateTime, Utc};
use nav_crypto::SessionToken;

/// An authenticated admin session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub issued_at: DateTime<Utc>,
}

/// Live sessions keyed by token.
///
/// Lives only in process memory. Sessions never expire; they end on logout
/// or when the process exits.
#[derive(Debug, Default)]
pub struct SessionTable {
    sessions: HashMap<String, Session>,
}

impl SessionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh token for `username`.
    pub fn issue(&mut self, username: &str) -> SessionToken {
        let token = SessionToken::generate();
        self.sessions.insert(
            token.as_str().to_string(),
            Session {
                username: username.to_string(),
                issued_at: Utc::now(),
            },
        );
        token
    }

    /// The session behind `token`, if it is live.
    pub fn get(&self, token: &str) -> Option<&Session> {
        if token.is_empty() {
            return None;
        }
        self.sessions.get(token)
    }

    /// End the session behind `token`. Returns `true` if it was live.
    pub fn revoke(&mut self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_and_lookup() {
        let mut table = SessionTable::new();
        let token = table.issue("admin");
        let session = table.get(token.as_str()).expect("session should be live");
        assert_eq!(session.username, "admin");
        assert!(session.issued_at <= Utc::now());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn empty_token_never_matches() {
        let mut table = SessionTable::new();
        table.issue("admin");
        assert!(table.get("").is_none());
    }

    #[test]
    fn revoke_is_idempotent() {
        let mut table = SessionTable::new();
        let token = table.issue("admin");
        assert!(table.revoke(token.as_str()));
        assert!(!table.revoke(token.as_str()));
        assert!(!table.revoke("unknown"));
        assert!(table.is_empty());
    }

    #[test]
    fn tokens_are_independent() {
        let mut table = SessionTable::new();
        let a = table.issue("admin");
        let b = table.issue("admin");
        assert_ne!(a, b);
        table.revoke(a.as_str());
        assert!(table.get(a.as_str()).is_none());
        assert!(table.get(b.as_str()).is_some());
    }
}
