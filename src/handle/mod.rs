//! Path handles: classified references to filesystem entries.

mod dir;
mod file;
mod path;

pub use dir::DirHandle;
pub use file::FileHandle;
pub use path::{PathHandle, PathKind};
