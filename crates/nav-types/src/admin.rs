use std::fmt;

use serde::{Deserialize, Serialize};

/// Username of the built-in admin identity.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
/// Plaintext password of the built-in admin identity.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// The single admin identity of a dataset.
///
/// `password_hash` is the lowercase hex SHA-256 digest of the plaintext
/// password. There is no salt, so two installs with the same password store
/// the same digest.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminAuth {
    pub username: String,
    pub password_hash: String,
}

impl AdminAuth {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Both fields are present. An incomplete identity is never used as-is.
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password_hash.is_empty()
    }

    /// The public part of the identity.
    pub fn view(&self) -> AdminView {
        AdminView {
            username: self.username.clone(),
        }
    }
}

impl fmt::Debug for AdminAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminAuth")
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Admin identity with the password digest stripped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminView {
    pub username: String,
}
