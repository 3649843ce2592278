//! io::Error context enrichment.
//!
//! Small adapter to turn a bare io::Error into a [`PathError::Io`] carrying
//! the operation, the path and a platform-aware hint, usable with map_err:
//!
//!   fs::create_dir(dir).map_err(io_ctx("create directory", dir))?;

use std::io;
use std::path::Path;

use crate::errors::PathError;

/// Platform-aware hint text for the common failure codes.
fn hint(e: &io::Error) -> &'static str {
    #[cfg(unix)]
    {
        if let Some(code) = e.raw_os_error() {
            return match code {
                libc::EACCES | libc::EPERM => {
                    " — permission denied; check ownership and write permissions."
                }
                libc::EXDEV => " — cross-filesystem; atomic rename not possible.",
                libc::ENOENT => " — path not found; verify it exists.",
                libc::EEXIST => " — already exists; pick a unique name or remove the target.",
                libc::ENOTDIR => " — a path component is not a directory.",
                libc::ENOSPC => " — insufficient space on device.",
                libc::EROFS => " — read-only filesystem; cannot write here.",
                _ => "",
            };
        }
    }

    match e.kind() {
        io::ErrorKind::PermissionDenied => {
            " — permission denied; check ownership and write permissions."
        }
        io::ErrorKind::NotFound => " — path not found; verify it exists.",
        io::ErrorKind::AlreadyExists => " — already exists; remove or choose a unique name.",
        _ => "",
    }
}

/// Returns a closure suitable for `.map_err(...)` that converts io::Error
/// into `PathError::Io` with the message "{op} '{path}': {err}" plus a hint
/// when one applies. The original error is kept as the source.
pub(crate) fn io_ctx<'a>(op: &'a str, path: &'a Path) -> impl FnOnce(io::Error) -> PathError + 'a {
    move |e: io::Error| {
        let context = format!("{} '{}': {}{}", op, path.display(), e, hint(&e));
        PathError::Io { context, source: e }
    }
}
