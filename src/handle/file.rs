//! FileHandle: a handle guaranteed to reference a file at construction.

use std::path::{Path, PathBuf};

use crate::create;
use crate::errors::{PathError, Result};
use crate::mover;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    path: PathBuf,
}

impl FileHandle {
    /// Errors with [`PathError::NotAFile`] when the path exists as a
    /// directory, [`PathError::NotFound`] when it exists as neither.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(if path.is_dir() {
                PathError::NotAFile(path)
            } else {
                PathError::NotFound(path)
            });
        }
        Ok(Self { path })
    }

    /// Touch-if-absent, then construct.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        create::ensure_file(path)?;
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Live file check, never cached.
    pub fn is_file(&self) -> bool {
        self.path.is_file()
    }

    /// Idempotent empty-file creation at the handle's path. Returns the
    /// handle for chaining.
    pub fn ensure_created(&self) -> Result<&Self> {
        create::ensure_file(&self.path)?;
        Ok(self)
    }

    /// Move to `dest` and return a new handle bound to the destination; the
    /// receiver is left untouched.
    pub fn move_to(&self, dest: impl AsRef<Path>) -> Result<FileHandle> {
        let dest = dest.as_ref();
        mover::move_entry(&self.path, dest)?;
        FileHandle::new(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn construction_requires_file() {
        let td = tempdir().unwrap();
        assert!(matches!(
            FileHandle::new(td.path()).unwrap_err(),
            PathError::NotAFile(_)
        ));
        assert!(matches!(
            FileHandle::new(td.path().join("missing.txt")).unwrap_err(),
            PathError::NotFound(_)
        ));
    }

    #[test]
    fn create_touches_then_is_idempotent() {
        let td = tempdir().unwrap();
        let p = td.path().join("new.txt");
        let h = FileHandle::create(&p).unwrap();
        assert!(h.is_file());
        h.ensure_created().unwrap();
        assert!(p.is_file());
    }

    #[test]
    fn ensure_created_recreates_after_external_delete() {
        let td = tempdir().unwrap();
        let p = td.path().join("flaky.txt");
        let h = FileHandle::create(&p).unwrap();
        fs::remove_file(&p).unwrap();
        h.ensure_created().unwrap();
        assert!(p.is_file());
    }
}
