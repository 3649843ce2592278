//! Copy+remove fallback for moves the rename primitive cannot serve.
//! Directory trees are enumerated once, directories first, then files copied
//! in parallel before the source tree is removed.

use rayon::prelude::*;
use std::fs;
use std::path::Path;
use tracing::info;
use walkdir::WalkDir;

use crate::errors::Result;
use crate::ioctx::io_ctx;

pub(super) fn copy_file_and_remove(src: &Path, dest: &Path) -> Result<()> {
    fs::copy(src, dest).map_err(io_ctx("copy file to destination", dest))?;
    fs::remove_file(src).map_err(io_ctx("remove original file", src))?;
    info!(src = %src.display(), dest = %dest.display(), "copied file and removed source");
    Ok(())
}

pub(super) fn copy_tree_and_remove(src: &Path, dest: &Path) -> Result<()> {
    WalkDir::new(src)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .try_for_each(|d| -> Result<()> {
            if let Ok(rel) = d.path().strip_prefix(src) {
                let new_dir = dest.join(rel);
                fs::create_dir_all(&new_dir).map_err(io_ctx("create directory", &new_dir))?;
            }
            Ok(())
        })?;

    let files: Vec<_> = WalkDir::new(src)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();

    files.par_iter().try_for_each(|path| -> Result<()> {
        if let Ok(rel) = path.strip_prefix(src) {
            let dst = dest.join(rel);
            if let Some(parent) = dst.parent() {
                fs::create_dir_all(parent).map_err(io_ctx("create directory", parent))?;
            }
            fs::copy(path, &dst).map_err(io_ctx("copy file to destination", &dst))?;
        }
        Ok(())
    })?;

    fs::remove_dir_all(src).map_err(io_ctx("remove source directory", src))?;
    info!(src = %src.display(), dest = %dest.display(), "copied directory contents and removed source");
    Ok(())
}
