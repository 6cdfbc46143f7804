//! Shared-password session authentication.
//!
//! ## Components
//! - `token`: `TokenCodec`, HS256 session tokens bound to their issuance time
//! - `gate`: `SessionGate` and `AuthState`, cookie to session state
//! - `password`: argon2 check of the shared login password

pub mod gate;
pub mod password;
pub mod token;

pub use gate::{
    AuthState, SESSION_COOKIE, SessionGate, cookie_value, expired_session_cookie, session_cookie,
};
pub use password::{SharedPassword, hash_password};
pub use token::{SESSION_TTL_SECS, SessionSecret, TokenCodec};
