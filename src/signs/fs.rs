//! Filesystem capability used by sign resolution.
//!
//! Everything that touches the signs tree goes through [`SignFs`], so the
//! catalog and handle logic can run against an in-memory tree in tests.

use std::io;
use std::path::{Path, PathBuf};

/// One child of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Read-only view of the signs tree.
pub trait SignFs: Send + Sync {
    /// Immediate children of `dir`, in whatever order the backend yields them.
    fn list_children(&self, dir: &Path) -> io::Result<Vec<ChildEntry>>;

    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Absolute path with symlinks and `..` resolved. Fails if `path` is absent.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;
}

/// [`SignFs`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl SignFs for LocalFs {
    fn list_children(&self, dir: &Path) -> io::Result<Vec<ChildEntry>> {
        let mut out = Vec::new();
        for entry in readable_entries(dir, std::fs::read_dir(dir)?) {
            // Non UTF-8 names can never pass validation; keep them visible so
            // the catalog can log them.
            let name = entry.file_name().to_string_lossy().into_owned();
            // file_type() does not follow symlinks; metadata() does.
            let is_dir = std::fs::metadata(entry.path())
                .map(|m| m.is_dir())
                .unwrap_or(false);
            out.push(ChildEntry { name, is_dir });
        }
        Ok(out)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }
}

/// Entries of `dir` that could be read; the rest are logged and skipped so one
/// bad entry never aborts a listing.
fn readable_entries<T>(
    dir: &Path,
    entries: impl IntoIterator<Item = io::Result<T>>,
) -> impl Iterator<Item = T> {
    entries.into_iter().filter_map(move |entry| match entry {
        Ok(entry) => Some(entry),
        Err(e) => {
            tracing::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
            None
        }
    })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_fs_lists_dirs_and_files() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("alpha")).unwrap();
        std::fs::write(tmp.path().join("readme.txt"), "hi").unwrap();

        let mut children = LocalFs.list_children(tmp.path()).unwrap();
        children.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(
            children,
            vec![
                ChildEntry {
                    name: "alpha".into(),
                    is_dir: true
                },
                ChildEntry {
                    name: "readme.txt".into(),
                    is_dir: false
                },
            ]
        );
    }

    #[test]
    fn test_local_fs_missing_dir_errors() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(LocalFs.list_children(&tmp.path().join("nope")).is_err());
        assert!(LocalFs.canonicalize(&tmp.path().join("nope")).is_err());
    }

    #[test]
    fn test_unreadable_entry_skipped() {
        let entries = vec![
            Ok("alpha"),
            Err(io::Error::from(io::ErrorKind::PermissionDenied)),
            Ok("beta"),
        ];
        let kept: Vec<_> = readable_entries(Path::new("/signs"), entries).collect();
        assert_eq!(kept, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_memory_fs_preserves_insert_order() {
        let fs = memory::MemoryFs::new("/signs")
            .dir("/signs/zeta")
            .dir("/signs/alpha");
        let names: Vec<_> = fs
            .list_children(Path::new("/signs"))
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }
}
