use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::error::ServerError;
use crate::state::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "nav_session";

/// Session cookie carrying `token`, valid for the whole site.
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// A cookie that tells the browser to drop the session cookie.
pub fn removal_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = session_cookie(String::new(), secure);
    cookie.make_removal();
    cookie
}

/// The session token presented with a request, if any.
pub fn presented_token(jar: &CookieJar) -> Option<&str> {
    jar.get(SESSION_COOKIE)
        .map(|cookie| cookie.value())
        .filter(|value| !value.is_empty())
}

/// An authenticated admin.
///
/// Extracting this rejects the request with `401` unless it carries a live
/// session cookie. It runs before the body is read, so an unauthenticated
/// request never gets as far as body validation.
#[derive(Clone, Debug)]
pub struct AdminSession {
    pub username: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = presented_token(&jar).unwrap_or_default().to_owned();
        let username = state
            .blocking(move |store| store.authenticate(&token))
            .await?;
        Ok(Self { username })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderMap, HeaderValue};

    #[test]
    fn session_cookie_attributes() {
        let rendered = session_cookie("abc".into(), false).to_string();
        assert!(rendered.starts_with("nav_session=abc"));
        assert!(rendered.contains("HttpOnly"));
        assert!(rendered.contains("SameSite=Lax"));
        assert!(rendered.contains("Path=/"));
        assert!(!rendered.contains("Secure"));
        assert!(session_cookie("abc".into(), true).to_string().contains("Secure"));
    }

    #[test]
    fn removal_cookie_expires_immediately() {
        let rendered = removal_cookie(false).to_string();
        assert!(rendered.starts_with("nav_session=;"));
        assert!(rendered.contains("Max-Age=0"));
        assert!(rendered.contains("Path=/"));
    }

    #[test]
    fn presented_token_ignores_empty_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("nav_session=; other=1"));
        assert_eq!(presented_token(&CookieJar::from_headers(&headers)), None);

        headers.insert(header::COOKIE, HeaderValue::from_static("other=1; nav_session=t0k"));
        assert_eq!(presented_token(&CookieJar::from_headers(&headers)), Some("t0k"));
    }
}
