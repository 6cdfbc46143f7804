use axum::http::HeaderMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::auth::{AuthState, SessionGate, SessionSecret, SharedPassword, TokenCodec};
use crate::signs::{AuthorizedSignResolver, SignCatalog, SignFs};

/// Gateway state shared by all requests. Read-only after startup.
pub struct AppState {
    /// Session cookie check
    pub gate: SessionGate,
    /// Shared login password
    pub password: SharedPassword,
    /// Listing of visible signs
    pub catalog: SignCatalog,
    /// Per-request sign lookup
    pub resolver: AuthorizedSignResolver,
}

impl AppState {
    pub fn new(
        fs: Arc<dyn SignFs>,
        signs_root: impl Into<PathBuf>,
        secret: &SessionSecret,
        password: SharedPassword,
    ) -> Self {
        let signs_root = signs_root.into();
        Self {
            gate: SessionGate::new(TokenCodec::new(secret)),
            password,
            catalog: SignCatalog::new(fs.clone(), signs_root.clone()),
            resolver: AuthorizedSignResolver::new(fs, signs_root),
        }
    }

    /// Session state of the request carrying `headers`.
    pub fn auth_state(&self, headers: &HeaderMap) -> AuthState {
        self.gate.auth_state(headers)
    }
}
