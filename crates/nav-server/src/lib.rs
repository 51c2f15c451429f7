//! HTTP server for the navigation dashboard.
//!
//! Exposes the catalog as a small JSON API. Reads are public; every
//! mutation requires an admin session established through `/api/login`
//! and carried in the `nav_session` cookie.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use api::{endpoints, limits, ChangePasswordRequest, HealthResponse, LoginRequest, OkResponse};
pub use auth::{AdminSession, SESSION_COOKIE};
pub use config::{ServerConfig, DEFAULT_PORT};
pub use error::{ServerError, ServerResult};
pub use router::build_router;
pub use server::NavServer;
pub use state::AppState;
