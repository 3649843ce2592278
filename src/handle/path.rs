//! PathHandle: a classified reference to an existing filesystem entry.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::create;
use crate::errors::{PathError, Result};
use crate::mover;
use crate::write::{self, Payload, WriteMode};

use super::dir::DirHandle;
use super::file::FileHandle;

/// Classification of a path at handle-construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
}

/// A handle to a path that existed as a file or directory when constructed.
///
/// `kind` is cached at construction and never refreshed; the filesystem can
/// change underneath the handle. Use the live predicates (`is_dir`,
/// `is_file`, `exists`) for correctness-critical checks — every
/// kind-dependent operation here re-validates against the live filesystem
/// before acting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathHandle {
    path: PathBuf,
    kind: PathKind,
}

impl PathHandle {
    /// Classify `path` (two stat calls). Errors with [`PathError::NotFound`]
    /// when the path exists as neither a file nor a directory.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let kind = if path.is_dir() {
            PathKind::Directory
        } else if path.is_file() {
            PathKind::File
        } else {
            return Err(PathError::NotFound(path));
        };
        debug!(path = %path.display(), ?kind, "classified path");
        Ok(Self { path, kind })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The classification cached at construction. May be stale.
    pub fn kind(&self) -> PathKind {
        self.kind
    }

    /// Live existence check (directory or file).
    pub fn exists(&self) -> bool {
        self.path.is_dir() || self.path.is_file()
    }

    /// Live directory check, never cached.
    pub fn is_dir(&self) -> bool {
        self.path.is_dir()
    }

    /// Live file check, never cached.
    pub fn is_file(&self) -> bool {
        self.path.is_file()
    }

    /// Suffix after the last `.` of the final segment, if any.
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .filter(|e| !e.is_empty())
            .map(|e| e.to_string_lossy().into_owned())
    }

    /// Final path segment.
    pub fn clean_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// All segments but the last. Pure splitting, no filesystem access.
    pub fn parent_segments(&self) -> Vec<String> {
        let mut segments: Vec<String> = self
            .path
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        segments.pop();
        segments
    }

    /// Move to `dest` and return a new handle bound to the destination. The
    /// receiver is left untouched, so a stale handle is never silently
    /// carried forward. Errors with [`PathError::NotFound`] when the path no
    /// longer exists.
    pub fn move_to(&self, dest: impl AsRef<Path>) -> Result<PathHandle> {
        let dest = dest.as_ref();
        if !self.exists() {
            return Err(PathError::NotFound(self.path.clone()));
        }
        mover::move_entry(&self.path, dest)?;
        PathHandle::new(dest)
    }

    /// Write `payload` under this path as `name.<format>`. See [`crate::write::write`].
    pub fn write(
        &self,
        name: &str,
        payload: Payload<'_>,
        format: &str,
        mode: WriteMode,
    ) -> Result<PathBuf> {
        write::write(&self.path, name, payload, format, mode)
    }

    /// Write under this path with a caller-supplied serializer.
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

    /// Idempotent creation of `path/segment` as a directory.
    pub fn make_directory(&self, segment: impl AsRef<Path>) -> Result<()> {
        create::ensure_directory(self.path.join(segment.as_ref()))
    }

    /// Idempotent creation of `path/segment` as an empty file.
    pub fn make_file(&self, segment: impl AsRef<Path>) -> Result<()> {
        create::ensure_file(self.path.join(segment.as_ref()))
    }

    /// Idempotent creation of `path/segment`, kind inferred from the
    /// presence of an extension in the segment.
    pub fn make(&self, segment: impl AsRef<Path>) -> Result<()> {
        create::ensure(self.path.join(segment.as_ref()))
    }

    /// Create-if-needed-then-enter: ensures `path/segment` exists (file when
    /// the segment carries an extension, directory otherwise) and returns a
    /// correctly classified handle rooted there.
    pub fn descend(&self, segment: impl AsRef<Path>) -> Result<PathHandle> {
        let target = self.path.join(segment.as_ref());
        create::ensure(&target)?;
        PathHandle::new(target)
    }

    /// Convert into a [`DirHandle`], re-validating against the live
    /// filesystem rather than trusting the cached kind.
    pub fn into_dir(self) -> Result<DirHandle> {
        DirHandle::new(self.path)
    }

    /// Convert into a [`FileHandle`], re-validating against the live
    /// filesystem rather than trusting the cached kind.
    pub fn into_file(self) -> Result<FileHandle> {
        FileHandle::new(self.path)
    }
}
