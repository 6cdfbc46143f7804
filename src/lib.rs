//! Signboard - sign catalog server
//!
//! Serves each sign's scene definition, assets and program files over HTTP.
//! Signs are directories under one root; private signs need a session
//! obtained with a shared password.
//!
//! # Modules
//!
//! - [`signs`] - Name validation, sign handles, catalog, authorized lookup
//! - [`auth`] - Session tokens, session gate, shared password
//! - [`gateway`] - HTTP routes and handlers
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing setup

pub mod auth;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod signs;

// Convenient re-exports at crate root
pub use auth::{AuthState, SessionGate, TokenCodec};
pub use signs::{AuthorizedSignResolver, SignCatalog, SignError, SignHandle, SignName};
