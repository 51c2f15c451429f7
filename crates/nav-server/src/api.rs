//! Request and response bodies of the JSON API.
//!
//! Catalog records travel as the [`nav_types`] types themselves; only the
//! auth requests and the small acknowledgement bodies live here.

use serde::{Deserialize, Serialize};

/// HTTP endpoint paths.
pub mod endpoints {
    pub const HEALTH: &str = "/healthz";
    pub const DATA: &str = "/api/data";
    pub const LOGIN: &str = "/api/login";
    pub const LOGOUT: &str = "/api/logout";
    pub const PASSWORD: &str = "/api/password";
    pub const CATEGORY: &str = "/api/category";
    pub const CATEGORY_BY_ID: &str = "/api/category/:id";
    pub const ITEM: &str = "/api/item";
    pub const ITEM_BY_ID: &str = "/api/item/:id";
}

/// Request body size limits, in bytes.
pub mod limits {
    pub const RESTORE: usize = 5 * 1024 * 1024;
    pub const ITEM: usize = 512 * 1024;
    pub const CATEGORY: usize = 128 * 1024;
    pub const AUTH: usize = 64 * 1024;
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// `{"ok": true}`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub const fn ok() -> Self {
        Self { ok: true }
    }
}

/// Liveness check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_defaults() {
        let h = HealthResponse::default();
        assert_eq!(h.status, "ok");
        assert!(!h.version.is_empty());
    }

    #[test]
    fn ok_response_shape() {
        let json = serde_json::to_value(OkResponse::ok()).unwrap();
        assert_eq!(json, serde_json::json!({"ok": true}));
    }

    #[test]
    fn login_request_tolerates_missing_fields() {
        let req: LoginRequest = serde_json::from_str(r#"{"username": "admin"}"#).unwrap();
        assert_eq!(req.username, "admin");
        assert!(req.password.is_empty());
    }

    #[test]
    fn endpoint_paths() {
        assert_eq!(endpoints::DATA, "/api/data");
        assert_eq!(endpoints::CATEGORY_BY_ID, "/api/category/:id");
        assert_eq!(endpoints::ITEM_BY_ID, "/api/item/:id");
    }
}
