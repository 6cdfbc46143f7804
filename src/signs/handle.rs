//! Validated, filesystem-safe handle to one sign directory.
//!
//! On-disk layout of a sign:
//!
//! ```text
//! <signs root>/<name>/
//!     scene.json      scene definition (required)
//!     meta.json       {"public": true}  (optional, absent => private)
//!     assets/         files served by name
//!     pgms/           program files, listed and served as text
//! ```
//!
//! Names are validated before any path is built. Sub-resource lookups are
//! additionally canonicalized and prefix-checked against their subtree, so a
//! looser charset or a symlink cannot walk out of the sign.

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use super::error::SignError;
use super::fs::SignFs;
use super::name::{ResourceName, SignName};

pub const SCENE_FILE: &str = "scene.json";
pub const META_FILE: &str = "meta.json";
pub const ASSETS_DIR: &str = "assets";
pub const PGMS_DIR: &str = "pgms";

#[derive(Debug, Default, Deserialize)]
struct SignMeta {
    #[serde(default)]
    public: bool,
}

/// A sign bound to `signs_root/<name>`. Built per request, never cached.
pub struct SignHandle<'fs> {
    fs: &'fs dyn SignFs,
    name: SignName,
    dir: PathBuf,
}

impl<'fs> SignHandle<'fs> {
    /// Validate `raw_name` and bind it under `signs_root`.
    ///
    /// Does not require the directory to exist; see [`SignHandle::exists`].
    pub fn resolve(
        fs: &'fs dyn SignFs,
        signs_root: &Path,
        raw_name: &str,
    ) -> Result<Self, SignError> {
        let name = SignName::new(raw_name)?;
        let dir = signs_root.join(name.as_str());

        // The charset forbids separators and dots; check anyway that the join
        // added exactly one normal component.
        let mut added = dir
            .strip_prefix(signs_root)
            .map_err(|_| SignError::InvalidName(raw_name.to_string()))?
            .components();
        if !matches!(
            (added.next(), added.next()),
            (Some(Component::Normal(_)), None)
        ) {
            return Err(SignError::InvalidName(raw_name.to_string()));
        }

        // A symlinked sign directory must still land inside the root.
        if let Ok(canonical) = fs.canonicalize(&dir) {
            let root = fs.canonicalize(signs_root)?;
            if !canonical.starts_with(&root) {
                return Err(SignError::InvalidName(raw_name.to_string()));
            }
        }

        Ok(Self { fs, name, dir })
    }

    pub fn name(&self) -> &SignName {
        &self.name
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Directory exists and holds a scene definition.
    pub fn exists(&self) -> bool {
        self.fs.is_dir(&self.dir) && self.fs.is_file(&self.scene_definition_path())
    }

    /// Public flag from `meta.json`. Missing or unreadable metadata is private.
    pub fn is_public(&self) -> bool {
        let path = self.dir.join(META_FILE);
        let raw = match self.fs.read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => return false,
        };
        match serde_json::from_str::<SignMeta>(&raw) {
            Ok(meta) => meta.public,
            Err(e) => {
                tracing::warn!(sign = %self.name, "Unparseable {}, treating as private: {}", META_FILE, e);
                false
            }
        }
    }

    pub fn scene_definition_path(&self) -> PathBuf {
        self.dir.join(SCENE_FILE)
    }

    /// Program names under `pgms/`, in filesystem order.
    ///
    /// Subdirectories and names the program lookup would reject are skipped.
    /// A sign without a `pgms/` directory has no programs.
    pub fn list_programs(&self) -> Result<impl Iterator<Item = ResourceName>, SignError> {
        let pgms = self.dir.join(PGMS_DIR);
        let children = if self.fs.is_dir(&pgms) {
            self.fs.list_children(&pgms)?
        } else {
            Vec::new()
        };
        Ok(children
            .into_iter()
            .filter(|c| !c.is_dir)
            .filter_map(|c| ResourceName::new("pgm", &c.name).ok()))
    }

    pub fn resolve_asset(&self, raw_name: &str) -> Result<PathBuf, SignError> {
        self.resolve_within(ASSETS_DIR, "asset", raw_name)
    }

    pub fn resolve_program(&self, raw_name: &str) -> Result<PathBuf, SignError> {
        self.resolve_within(PGMS_DIR, "pgm", raw_name)
    }

    /// Charset check, then canonicalize-then-prefix-check against `subdir`.
    fn resolve_within(
        &self,
        subdir: &str,
        field: &'static str,
        raw_name: &str,
    ) -> Result<PathBuf, SignError> {
        let name = ResourceName::new(field, raw_name)?;
        let base = self.dir.join(subdir);
        let not_found = || SignError::NotFound(format!("{}/{}/{}", self.name, subdir, name));

        let sign_dir = self.fs.canonicalize(&self.dir).map_err(|_| not_found())?;
        let base = self.fs.canonicalize(&base).map_err(|_| not_found())?;
        // A symlinked assets/ or pgms/ must not move the subtree out of the sign.
        if !base.starts_with(&sign_dir) || base == sign_dir {
            return Err(SignError::InvalidName(raw_name.to_string()));
        }
        let path = self
            .fs
            .canonicalize(&base.join(name.as_str()))
            .map_err(|_| not_found())?;

        if !path.starts_with(&base) || path == base {
            return Err(SignError::InvalidName(raw_name.to_string()));
        }
        if !self.fs.is_file(&path) {
            return Err(not_found());
        }
        Ok(path)
    }
}
