//! DirHandle: traversal and creation over an existing directory.
//!
//! `dig` enters a subdirectory and creates it first when absent; `slide` is
//! the strict counterpart that requires the subdirectory to already exist.
//! `rise` walks up one segment. The handle's own path advances on traversal;
//! moves instead return a fresh handle bound to the destination.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::create;
use crate::errors::{PathError, Result};
use crate::ioctx::io_ctx;
use crate::mover;
use crate::write::{self, Payload, WriteMode};

use super::path::PathHandle;

/// A handle to a path that was a directory when constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirHandle {
    path: PathBuf,
}

impl DirHandle {
    /// Errors with [`PathError::NotADirectory`] when the path exists as a
    /// file, [`PathError::NotFound`] when it exists as neither.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_dir() {
            return Err(if path.is_file() {
                PathError::NotADirectory(path)
            } else {
                PathError::NotFound(path)
            });
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_absolute(&self) -> bool {
        self.path.is_absolute()
    }

    /// Create subdirectory `segment`. Idempotent when it already exists as a
    /// directory; errors with [`PathError::FileInTheWay`] when a file sits
    /// there.
    pub fn add(&self, segment: impl AsRef<Path>) -> Result<()> {
        let target = self.path.join(segment.as_ref());
        if target.is_dir() {
            return Ok(());
        }
        if target.is_file() {
            return Err(PathError::FileInTheWay(target));
        }
        fs::create_dir(&target).map_err(io_ctx("create subdirectory", &target))?;
        debug!(path = %target.display(), "created subdirectory");
        Ok(())
    }

    /// Enter `path/segment`, creating the directory first when absent.
    /// Idempotent. [`PathError::DigIntoNonDirectory`] is reserved for an
    /// entry actually occupying the location; any other creation failure
    /// (missing parent, permissions) propagates the underlying OS error.
    pub fn dig(&mut self, segment: impl AsRef<Path>) -> Result<&mut Self> {
        let target = self.path.join(segment.as_ref());
        if !target.is_dir() {
            if target.is_file() {
                return Err(PathError::DigIntoNonDirectory(target));
            }
            if let Err(e) = fs::create_dir(&target) {
                if target.is_file() {
                    return Err(PathError::DigIntoNonDirectory(target));
                }
                return Err(io_ctx("create directory", &target)(e));
            }
        }
        if !target.is_dir() {
            // Our own creation raced with something else; clear what the
            // attempt left behind, best-effort.
            let _ = fs::remove_dir(&target);
            return Err(PathError::DigIntoNonDirectory(target));
        }
        debug!(path = %target.display(), "dug into directory");
        self.path = target;
        Ok(self)
    }

    /// Enter `path/segment`, which must already exist as a directory. This is
    /// the strict counterpart to [`DirHandle::dig`]; it never creates.
    pub fn slide(&mut self, segment: impl AsRef<Path>) -> Result<&mut Self> {
        let target = self.path.join(segment.as_ref());
        if !target.is_dir() {
            return Err(PathError::NotADirectory(target));
        }
        self.path = target;
        Ok(self)
    }

    /// Move up one path segment. Errors with [`PathError::NotADirectory`]
    /// when the parent is not a valid directory.
    pub fn rise(&mut self) -> Result<&mut Self> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => return Err(PathError::NotADirectory(self.path.clone())),
        };
        if !parent.is_dir() {
            return Err(PathError::NotADirectory(parent));
        }
        self.path = parent;
        Ok(self)
    }

    /// First immediate child whose name matches `name` exactly, or `None`.
    pub fn find(&self, name: &str) -> Result<Option<PathHandle>> {
        for entry in WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.file_name().to_str() == Some(name) {
                return Ok(Some(PathHandle::new(entry.path())?));
            }
        }
        Ok(None)
    }

    /// Split the path into (parent, final segment). Pure, no filesystem
    /// access.
    pub fn split(&self) -> (PathBuf, String) {
        let parent = self.path.parent().map(Path::to_path_buf).unwrap_or_default();
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        (parent, name)
    }

    /// Join `segments` into a single path. Pure.
    pub fn join(segments: &[impl AsRef<Path>]) -> PathBuf {
        let mut out = PathBuf::new();
        for segment in segments {
            out.push(segment.as_ref());
        }
        out
    }

    /// Move the whole tree to `dest` and return a handle bound to the
    /// destination; the receiver is left untouched. Errors with
    /// [`PathError::DestinationExists`] when `dest` is already a directory.
    pub fn move_to(&self, dest: impl AsRef<Path>) -> Result<DirHandle> {
        let dest = dest.as_ref();
        if dest.is_dir() {
            return Err(PathError::DestinationExists(dest.to_path_buf()));
        }
        mover::move_entry(&self.path, dest)?;
        info!(src = %self.path.display(), dest = %dest.display(), "moved directory");
        DirHandle::new(dest)
    }

    /// See [`PathHandle::descend`].
    pub fn descend(&self, segment: impl AsRef<Path>) -> Result<PathHandle> {
        let target = self.path.join(segment.as_ref());
        create::ensure(&target)?;
        PathHandle::new(target)
    }

    /// Write `payload` into this directory as `name.<format>`.
    pub fn write(
        &self,
        name: &str,
        payload: Payload<'_>,
        format: &str,
        mode: WriteMode,
    ) -> Result<PathBuf> {
        write::write(&self.path, name, payload, format, mode)
    }

    /// Write into this directory with a caller-supplied serializer.
    pub fn write_with<F>(
        &self,
        name: &str,
        format: &str,
        mode: WriteMode,
        serialize: F,
    ) -> Result<PathBuf>
    where
        F: FnOnce(&mut fs::File) -> io::Result<()>,
    {
        write::write_with(&self.path, name, format, mode, serialize)
    }

    /// Loosen back into an untyped handle (re-classifies).
    pub fn into_path_handle(self) -> Result<PathHandle> {
        PathHandle::new(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn construction_requires_directory() {
        let td = tempdir().unwrap();
        let f = td.path().join("a.txt");
        fs::write(&f, b"x").unwrap();
        assert!(matches!(
            DirHandle::new(&f).unwrap_err(),
            PathError::NotADirectory(_)
        ));
        assert!(matches!(
            DirHandle::new(td.path().join("missing")).unwrap_err(),
            PathError::NotFound(_)
        ));
    }

    #[test]
    fn add_is_idempotent_but_rejects_file() {
        let td = tempdir().unwrap();
        let d = DirHandle::new(td.path()).unwrap();
        d.add("sub").unwrap();
        d.add("sub").unwrap();
        assert!(td.path().join("sub").is_dir());

        fs::write(td.path().join("taken"), b"x").unwrap();
        let err = d.add("taken").unwrap_err();
        assert!(matches!(err, PathError::FileInTheWay(_)));
    }

    #[test]
    fn dig_then_rise_restores_original_path() {
        let td = tempdir().unwrap();
        let mut d = DirHandle::new(td.path()).unwrap();
        let original = d.path().to_path_buf();
        d.dig("b").unwrap();
        assert_eq!(d.path(), original.join("b"));
        d.rise().unwrap();
        assert_eq!(d.path(), original.as_path());
    }

    #[test]
    fn dig_is_idempotent() {
        let td = tempdir().unwrap();
        let mut d = DirHandle::new(td.path()).unwrap();
        d.dig("b").unwrap();
        d.rise().unwrap();
        d.dig("b").unwrap();
        assert_eq!(d.path(), td.path().join("b"));
    }

    #[test]
    fn dig_into_file_reports_non_directory() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("flat"), b"x").unwrap();
        let mut d = DirHandle::new(td.path()).unwrap();
        let err = d.dig("flat").unwrap_err();
        assert!(matches!(err, PathError::DigIntoNonDirectory(_)));
        // Handle stays where it was and the pre-existing file survives.
        assert_eq!(d.path(), td.path());
        assert!(td.path().join("flat").is_file());
    }

    #[test]
    fn dig_with_missing_parent_surfaces_os_error() {
        let td = tempdir().unwrap();
        let mut d = DirHandle::new(td.path()).unwrap();
        let err = d.dig("a/b").unwrap_err();
        assert!(matches!(err, PathError::Io { .. }));
        assert_eq!(d.path(), td.path());
    }

    #[test]
    fn slide_requires_existing_directory() {
        let td = tempdir().unwrap();
        let mut d = DirHandle::new(td.path()).unwrap();
        let err = d.slide("nowhere").unwrap_err();
        assert!(matches!(err, PathError::NotADirectory(_)));

        fs::create_dir(td.path().join("here")).unwrap();
        d.slide("here").unwrap();
        assert_eq!(d.path(), td.path().join("here"));
    }

    #[test]
    fn find_matches_exact_names_only() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("notes.txt"), b"x").unwrap();
        fs::create_dir(td.path().join("notes")).unwrap();
        let d = DirHandle::new(td.path()).unwrap();
        let hit = d.find("notes.txt").unwrap().unwrap();
        assert_eq!(hit.clean_name(), "notes.txt");
        assert!(d.find("note").unwrap().is_none());
    }

    #[test]
    fn split_and_join_are_inverse_for_simple_paths() {
        let td = tempdir().unwrap();
        fs::create_dir(td.path().join("leaf")).unwrap();
        let mut d = DirHandle::new(td.path()).unwrap();
        d.slide("leaf").unwrap();
        let (parent, name) = d.split();
        assert_eq!(DirHandle::join(&[parent.as_path(), Path::new(&name)]), d.path());
    }

    #[test]
    fn move_to_rejects_existing_destination() {
        let td = tempdir().unwrap();
        fs::create_dir(td.path().join("src")).unwrap();
        fs::create_dir(td.path().join("dst")).unwrap();
        let d = DirHandle::new(td.path().join("src")).unwrap();
        let err = d.move_to(td.path().join("dst")).unwrap_err();
        assert!(matches!(err, PathError::DestinationExists(_)));
        assert!(td.path().join("src").is_dir());
    }
}
