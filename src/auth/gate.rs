//! Per-request session check from the `access-token` cookie.

use axum::http::{HeaderMap, header};

use super::token::{SESSION_TTL_SECS, TokenCodec};

/// Cookie carrying the session token.
pub const SESSION_COOKIE: &str = "access-token";

/// Session state of one request. Recomputed every request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Authenticated,
    Anonymous,
}

impl AuthState {
    pub fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

impl From<bool> for AuthState {
    fn from(authenticated: bool) -> Self {
        if authenticated {
            Self::Authenticated
        } else {
            Self::Anonymous
        }
    }
}

/// Answers "is this request authenticated" from a presented token.
pub struct SessionGate {
    codec: TokenCodec,
}

impl SessionGate {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Absent cookie is anonymous; anything present must verify.
    pub fn is_authenticated(&self, cookie_value: Option<&str>) -> bool {
        match cookie_value {
            Some(token) => self.codec.verify(token),
            None => false,
        }
    }

    /// Session state from the request's `Cookie` headers.
    pub fn auth_state(&self, headers: &HeaderMap) -> AuthState {
        self.is_authenticated(cookie_value(headers, SESSION_COOKIE))
            .into()
    }
}

/// First value of cookie `name` across all `Cookie` headers.
pub fn cookie_value<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.trim_matches('"'))
}

/// `Set-Cookie` value installing a session token.
pub fn session_cookie(token: &str) -> String {
    format!(
        "{}={}; HttpOnly; Max-Age={}; Path=/; SameSite=Lax",
        SESSION_COOKIE, token, SESSION_TTL_SECS
    )
}

/// `Set-Cookie` value removing the session cookie from the browser.
pub fn expired_session_cookie() -> String {
    format!("{}=; HttpOnly; Max-Age=0; Path=/; SameSite=Lax", SESSION_COOKIE)
}
