//! Idempotent creation helpers.
//!
//! Each helper is a no-op when the target already exists as the desired kind
//! and errors when something of the wrong kind sits on the path. `ensure`
//! infers file-vs-directory from the presence of an extension in the final
//! segment.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::{PathError, Result};
use crate::ioctx::io_ctx;

/// True when the final path segment carries a non-empty extension.
pub(crate) fn has_extension(path: &Path) -> bool {
    path.extension().map(|e| !e.is_empty()).unwrap_or(false)
}

/// Create `path` as a directory unless it already is one.
pub fn ensure_directory(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(());
    }
    if path.is_file() {
        return Err(PathError::FileInTheWay(path.to_path_buf()));
    }
    fs::create_dir(path).map_err(io_ctx("create directory", path))?;
    debug!(path = %path.display(), "created directory");
    Ok(())
}

/// Create `path` as an empty file unless it already is a file.
pub fn ensure_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.is_file() {
        return Ok(());
    }
    if path.is_dir() {
        return Err(PathError::NotAFile(path.to_path_buf()));
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_ctx("create file", path))?;
    debug!(path = %path.display(), "created empty file");
    Ok(())
}

/// Create `path` as a file when its final segment has an extension, as a
/// directory otherwise.
pub fn ensure(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if has_extension(path) {
        ensure_file(path)
    } else {
        ensure_directory(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn ensure_directory_is_idempotent() {
        let td = tempdir().unwrap();
        let p = td.path().join("d");
        ensure_directory(&p).unwrap();
        ensure_directory(&p).unwrap();
        assert!(p.is_dir());
    }

    #[test]
    fn ensure_directory_rejects_file_in_the_way() {
        let td = tempdir().unwrap();
        let p = td.path().join("taken");
        fs::write(&p, b"x").unwrap();
        let err = ensure_directory(&p).unwrap_err();
        assert!(matches!(err, PathError::FileInTheWay(_)));
    }

    #[test]
    fn ensure_file_is_idempotent() {
        let td = tempdir().unwrap();
        let p = td.path().join("f.txt");
        ensure_file(&p).unwrap();
        ensure_file(&p).unwrap();
        assert!(p.is_file());
    }

    #[test]
    fn ensure_file_rejects_directory() {
        let td = tempdir().unwrap();
        let p = td.path().join("d");
        fs::create_dir(&p).unwrap();
        let err = ensure_file(&p).unwrap_err();
        assert!(matches!(err, PathError::NotAFile(_)));
    }

    #[test]
    fn ensure_infers_kind_from_extension() {
        let td = tempdir().unwrap();
        let f = td.path().join("notes.txt");
        let d = td.path().join("plain");
        ensure(&f).unwrap();
        ensure(&d).unwrap();
        assert!(f.is_file());
        assert!(d.is_dir());
    }
}
