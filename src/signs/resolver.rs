//! Per-request sign lookup with the visibility check applied.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::error::SignError;
use super::fs::SignFs;
use super::handle::SignHandle;
use crate::auth::AuthState;

/// Turns a raw path parameter into a usable [`SignHandle`].
///
/// Steps, in order:
/// 1. validate and bind the name (`InvalidName`)
/// 2. require a scene definition on disk (`NotFound`)
/// 3. refuse private signs to anonymous callers (`Forbidden`)
///
/// Callers must not let the three reasons produce distinguishable responses.
#[derive(Clone)]
pub struct AuthorizedSignResolver {
    fs: Arc<dyn SignFs>,
    root: PathBuf,
}

impl AuthorizedSignResolver {
    pub fn new(fs: Arc<dyn SignFs>, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, raw_name: &str, auth: AuthState) -> Result<SignHandle<'_>, SignError> {
        let handle = SignHandle::resolve(self.fs.as_ref(), &self.root, raw_name)?;

        if !handle.exists() {
            return Err(SignError::NotFound(raw_name.to_string()));
        }

        if !handle.is_public() && !auth.is_authenticated() {
            return Err(SignError::Forbidden(raw_name.to_string()));
        }

        Ok(handle)
    }
}
