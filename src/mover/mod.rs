//! Move operations: unconditional and substring-matched.
//!
//! Stateless free functions. The unconditional primitive tries an atomic
//! rename first and falls back to copy+remove when the rename fails
//! (typically a cross-filesystem move).

mod fallback;
mod matched;

pub use matched::{match_substring, move_directory, move_file, move_matching};

use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::errors::{PathError, Result};

/// Unconditional move of a file or directory to `dest`.
pub fn move_entry(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<()> {
    let src = src.as_ref();
    let dest = dest.as_ref();

    if !src.is_dir() && !src.is_file() {
        return Err(PathError::NotFound(src.to_path_buf()));
    }

    match fs::rename(src, dest) {
        Ok(()) => {
            info!(src = %src.display(), dest = %dest.display(), "renamed atomically");
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "rename failed, falling back to copy+remove");
            if src.is_dir() {
                fallback::copy_tree_and_remove(src, dest)
            } else {
                fallback::copy_file_and_remove(src, dest)
            }
        }
    }
}
