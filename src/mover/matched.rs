//! Substring-matched moves.
//!
//! A "matched move" relocates an entry only when one of a set of patterns
//! occurs as a substring of the entry's full path string. The kind-checked
//! wrappers (`move_directory`, `move_file`) require the source to currently
//! be of the right kind and report `Ok(false)` otherwise, with no filesystem
//! change.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::Result;

use super::move_entry;

/// First pattern that occurs as a substring of the full path string.
pub fn match_substring<'a>(path: &Path, patterns: &'a [impl AsRef<str>]) -> Option<&'a str> {
    let haystack = path.to_string_lossy();
    patterns
        .iter()
        .map(|p| p.as_ref())
        .find(|p| haystack.contains(*p))
}

/// Move `path` into `dest_dir/<final segment>` when any pattern matches the
/// full path; `Ok(false)` and no filesystem change otherwise.
pub fn move_matching(
    path: impl AsRef<Path>,
    patterns: &[impl AsRef<str>],
    dest_dir: impl AsRef<Path>,
) -> Result<bool> {
    let path = path.as_ref();
    let Some(pattern) = match_substring(path, patterns) else {
        debug!(path = %path.display(), "no pattern matched; leaving in place");
        return Ok(false);
    };
    let name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    let dest = dest_dir.as_ref().join(name);
    move_entry(path, &dest)?;
    info!(src = %path.display(), pattern, dest = %dest.display(), "matched move");
    Ok(true)
}

/// When `dest_dir` already exists as a directory, the entry lands inside it
/// under its own name; otherwise `dest_dir` is the destination itself.
fn into_dir_dest(src: &Path, dest_dir: &Path) -> PathBuf {
    if dest_dir.is_dir() {
        dest_dir.join(src.file_name().map(|n| n.to_os_string()).unwrap_or_default())
    } else {
        dest_dir.to_path_buf()
    }
}

/// Matched or unconditional directory move. `Ok(false)` when `path` is not
/// currently a directory.
pub fn move_directory(
    path: impl AsRef<Path>,
    dest_dir: impl AsRef<Path>,
    patterns: Option<&[&str]>,
) -> Result<bool> {
    let path = path.as_ref();
    if !path.is_dir() {
        debug!(path = %path.display(), "not a directory; refusing move");
        return Ok(false);
    }
    match patterns {
        Some(patterns) if !patterns.is_empty() => move_matching(path, patterns, dest_dir),
        _ => {
            move_entry(path, &into_dir_dest(path, dest_dir.as_ref()))?;
            Ok(true)
        }
    }
}

/// Matched or unconditional file move. `Ok(false)` when `path` is not
/// currently a file — file validity is required on both branches.
pub fn move_file(
    path: impl AsRef<Path>,
    dest_dir: impl AsRef<Path>,
    patterns: Option<&[&str]>,
) -> Result<bool> {
    let path = path.as_ref();
    if !path.is_file() {
        debug!(path = %path.display(), "not a file; refusing move");
        return Ok(false);
    }
    match patterns {
        Some(patterns) if !patterns.is_empty() => move_matching(path, patterns, dest_dir),
        _ => {
            move_entry(path, &into_dir_dest(path, dest_dir.as_ref()))?;
            Ok(true)
        }
    }
}
