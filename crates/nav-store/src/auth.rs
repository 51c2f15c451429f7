//! Admin credentials and sessions.
//!
//! Sessions share the store lock with the dataset, so a password change and
//! a login never observe each other half-done.

use nav_crypto::{digests_match, hash_password, verify_password, SessionToken};
use nav_types::TypeError;

use crate::error::{StoreError, StoreResult};
use crate::store::NavStore;

impl NavStore {
    /// Check the admin credentials and open a new session.
    ///
    /// Each successful login issues a distinct token; earlier tokens stay
    /// valid.
    pub fn login(&self, username: &str, password: &str) -> StoreResult<SessionToken> {
        let mut state = self.lock();
        let admin = &state.dataset.admin;
        let name_matches = username == admin.username;
        let password_matches = verify_password(password, &admin.password_hash);
        if !(name_matches && password_matches) {
            tracing::warn!("rejected login attempt");
            return Err(StoreError::Unauthorized);
        }

        let username = admin.username.clone();
        let token = state.sessions.issue(&username);
        tracing::info!(user = %username, token = token.short(), "admin logged in");
        Ok(token)
    }

    /// End the session behind `token`, if any.
    ///
    /// Unknown or empty tokens are not an error. Returns `true` if a live
    /// session was ended.
    pub fn logout(&self, token: &str) -> bool {
        let revoked = self.lock().sessions.revoke(token);
        if revoked {
            tracing::info!(token = SessionToken::from_client(token).short(), "admin logged out");
        }
        revoked
    }

    /// The username behind a live session token.
    pub fn authenticate(&self, token: &str) -> StoreResult<String> {
        self.lock()
            .sessions
            .get(token)
            .map(|session| session.username.clone())
            .ok_or(StoreError::Unauthorized)
    }

    /// Rotate the admin password.
    ///
    /// Live sessions, including the caller's, remain valid.
    pub fn change_password(&self, old_password: &str, new_password: &str) -> StoreResult<()> {
        if new_password.trim().is_empty() {
            return Err(TypeError::Required("new password").into());
        }
        let mut state = self.lock();
        let current = &state.dataset.admin.password_hash;
        if !digests_match(&hash_password(old_password), current) {
            tracing::warn!("rejected password change: old password mismatch");
            return Err(StoreError::Unauthorized);
        }
        state.dataset.admin.password_hash = hash_password(new_password);
        self.flush(&state.dataset)?;
        tracing::info!("admin password changed");
        Ok(())
    }
}
