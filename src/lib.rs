//! Core library for `pathdig`.
//!
//! A convenience layer over filesystem primitives for scripts that manipulate
//! a local directory tree: classified path handles, directory traversal and
//! creation (`add`, `dig`, `slide`, `rise`, `descend`), format-dispatched
//! file writing (JSON / text / binary) and move operations with optional
//! filename-substring matching.
//!
//! Handles classify their path once, eagerly, at construction; the cached
//! kind can go stale if the filesystem changes underneath. Live predicates
//! (`is_dir`, `is_file`, `exists`) re-stat on every call and kind-dependent
//! operations re-validate before acting. Moves never mutate a handle: they
//! return a fresh handle bound to the destination.
//!
//! Everything is synchronous and blocking, one OS call per operation; errors
//! are surfaced immediately as [`PathError`] values with no retries.

mod create;
mod errors;
mod handle;
mod ioctx;
mod mover;
mod write;

pub use create::{ensure, ensure_directory, ensure_file};
pub use errors::{PathError, Result};
pub use handle::{DirHandle, FileHandle, PathHandle, PathKind};
pub use mover::{match_substring, move_directory, move_entry, move_file, move_matching};
pub use write::{Payload, WriteFormat, WriteMode};

/// Commonly used items for glob import in scripts.
pub mod prelude {
    pub use crate::errors::{PathError, Result};
    pub use crate::handle::{DirHandle, FileHandle, PathHandle, PathKind};
    pub use crate::write::{Payload, WriteFormat, WriteMode};
}
