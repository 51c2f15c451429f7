//! Credential primitives for the navigation dashboard.
//!
//! Provides the admin password digest, a constant-time digest comparison,
//! and random session tokens.
//!
//! The password digest is an unsalted SHA-256. That is weak as a credential
//! store, but it is the format already written into existing data files, so
//! changing it would lock out every existing install.
//!
//! All crypto operations wrap established libraries; there is no custom cryptography.

pub mod password;
pub mod token;

pub use password::{default_admin, digests_match, hash_password, verify_password};
pub use token::SessionToken;
