//! Listing of the signs visible to a caller.

use std::path::PathBuf;
use std::sync::Arc;

use super::error::SignError;
use super::fs::SignFs;
use super::handle::SignHandle;
use super::name::SignName;
use crate::auth::AuthState;

/// Enumerates sign directories under the signs root.
#[derive(Clone)]
pub struct SignCatalog {
    fs: Arc<dyn SignFs>,
    root: PathBuf,
}

impl SignCatalog {
    pub fn new(fs: Arc<dyn SignFs>, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
        }
    }

    /// Names of the signs `auth` may see, in filesystem order.
    ///
    /// Dot entries and plain files are skipped silently. Directories whose
    /// name fails validation, or that lack a scene definition, are logged and
    /// skipped. Private signs are only listed for authenticated callers.
    pub fn list(&self, auth: AuthState) -> Result<Vec<SignName>, SignError> {
        let mut signs = Vec::new();

        for child in self.fs.list_children(&self.root)? {
            if child.name.starts_with('.') || !child.is_dir {
                continue;
            }

            let handle = match SignHandle::resolve(self.fs.as_ref(), &self.root, &child.name) {
                Ok(handle) => handle,
                Err(e) => {
                    tracing::warn!(
                        "The directory {}/{} could not be validated as a sign name: {}",
                        self.root.display(),
                        child.name,
                        e
                    );
                    continue;
                }
            };

            if !handle.exists() {
                tracing::warn!(
                    "The directory {} has no scene definition, skipping",
                    handle.dir().display()
                );
                continue;
            }

            if handle.is_public() || auth.is_authenticated() {
                signs.push(handle.name().clone());
            }
        }

        Ok(signs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signs::fs::memory::MemoryFs;

    fn catalog() -> SignCatalog {
        let fs = MemoryFs::new("/signs")
            .dir("/signs/zeta")
            .file("/signs/zeta/scene.json", "{}")
            .file("/signs/zeta/meta.json", r#"{"public": true}"#)
            .dir("/signs/secret")
            .file("/signs/secret/scene.json", "{}")
            .file("/signs/secret/meta.json", r#"{"public": false}"#)
            .dir("/signs/alpha")
            .file("/signs/alpha/scene.json", "{}")
            .file("/signs/alpha/meta.json", r#"{"public": true}"#)
            .dir("/signs/nometa")
            .file("/signs/nometa/scene.json", "{}")
            .dir("/signs/.git")
            .file("/signs/.git/scene.json", "{}")
            .file("/signs/.git/meta.json", r#"{"public": true}"#)
            .dir("/signs/bad name")
            .file("/signs/bad name/scene.json", "{}")
            .file("/signs/bad name/meta.json", r#"{"public": true}"#)
            .dir("/signs/noscene")
            .file("/signs/noscene/meta.json", r#"{"public": true}"#)
            .file("/signs/README", "not a sign");
        SignCatalog::new(Arc::new(fs), "/signs")
    }

    fn names(list: Vec<SignName>) -> Vec<String> {
        list.into_iter().map(SignName::into_string).collect()
    }

    #[test]
    fn test_anonymous_sees_public_only() {
        let listed = names(catalog().list(AuthState::Anonymous).unwrap());
        assert_eq!(listed, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_authenticated_sees_private() {
        let listed = names(catalog().list(AuthState::Authenticated).unwrap());
        assert_eq!(listed, vec!["zeta", "secret", "alpha", "nometa"]);
    }

    #[test]
    fn test_dot_and_invalid_entries_never_listed() {
        for auth in [AuthState::Anonymous, AuthState::Authenticated] {
            let listed = names(catalog().list(auth).unwrap());
            assert!(!listed.iter().any(|n| n.starts_with('.')));
            assert!(!listed.contains(&"bad name".to_string()));
            assert!(!listed.contains(&"noscene".to_string()));
            assert!(!listed.contains(&"README".to_string()));
        }
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let catalog = SignCatalog::new(Arc::new(MemoryFs::new("/other")), "/signs");
        assert!(matches!(
            catalog.list(AuthState::Anonymous),
            Err(SignError::Io(_))
        ));
    }

    #[test]
    fn test_empty_root_lists_nothing() {
        let catalog = SignCatalog::new(Arc::new(MemoryFs::new("/signs")), "/signs");
        assert!(catalog.list(AuthState::Authenticated).unwrap().is_empty());
    }
}
