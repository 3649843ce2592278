//! Format-dispatched file writing.
//!
//! `write` composes `dir/name.<ext>` from a recognized format, serializes the
//! payload and returns the composed path. JSON is pretty-printed with 4-space
//! indentation and non-ASCII characters preserved literally. `write_with`
//! hands the open file to a caller closure for full serialization control;
//! either way the file is open only for the duration of the write and closed
//! on every exit path, including an erroring closure.

use std::fs::{File, OpenOptions};
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::errors::{PathError, Result};
use crate::ioctx::io_ctx;

/// Recognized write formats. `Json`/`Txt` carry text, the rest raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteFormat {
    Json,
    Txt,
    Jpg,
    Png,
    Gif,
    Pdf,
}

impl WriteFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Txt => "txt",
            Self::Jpg => "jpg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Pdf => "pdf",
        }
    }

    pub fn is_text(self) -> bool {
        matches!(self, Self::Json | Self::Txt)
    }
}

impl FromStr for WriteFormat {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "txt" => Ok(Self::Txt),
            "jpg" => Ok(Self::Jpg),
            "png" => Ok(Self::Png),
            "gif" => Ok(Self::Gif),
            "pdf" => Ok(Self::Pdf),
            other => Err(PathError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Truncate-or-append, the "w"/"a" pair. Either mode creates the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    #[default]
    Truncate,
    Append,
}

/// What gets serialized. The payload kind must agree with the format.
#[derive(Debug, Clone, Copy)]
pub enum Payload<'a> {
    Json(&'a serde_json::Value),
    Text(&'a str),
    Bytes(&'a [u8]),
}

fn composed(dir: &Path, name: &str, format: WriteFormat) -> PathBuf {
    dir.join(format!("{}.{}", name, format.extension()))
}

fn open_target(path: &Path, mode: WriteMode) -> Result<File> {
    let mut opts = OpenOptions::new();
    opts.write(true).create(true);
    match mode {
        WriteMode::Truncate => opts.truncate(true),
        WriteMode::Append => opts.append(true),
    };
    opts.open(path).map_err(io_ctx("open file for writing", path))
}

/// 4-space indent, non-ASCII written literally (serde_json does not escape
/// non-ASCII by default).
fn write_pretty_json(file: &mut File, value: &serde_json::Value) -> io::Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut *file, formatter);
    value.serialize(&mut ser).map_err(io::Error::from)
}

fn payload_agrees(format: WriteFormat, payload: &Payload<'_>) -> bool {
    match (format, payload) {
        (WriteFormat::Json, Payload::Json(_)) => true,
        (WriteFormat::Txt, Payload::Text(_)) => true,
        (f, Payload::Bytes(_)) => !f.is_text(),
        _ => false,
    }
}

fn mismatch(format: WriteFormat) -> PathError {
    PathError::FormatMismatch {
        format: format.extension(),
        expected: match format {
            WriteFormat::Json => "a JSON value",
            WriteFormat::Txt => "text",
            _ => "raw bytes",
        },
    }
}

/// Write `payload` under `dir` as `name.<format>`; returns the composed path.
/// Don't include the extension in `name` — the format supplies it.
/// Format and payload agreement is checked before the target is opened, so a
/// rejected write never creates or truncates anything.
pub fn write(
    dir: &Path,
    name: &str,
    payload: Payload<'_>,
    format: &str,
    mode: WriteMode,
) -> Result<PathBuf> {
    let format = WriteFormat::from_str(format)?;
    if !payload_agrees(format, &payload) {
        return Err(mismatch(format));
    }
    let target = composed(dir, name, format);
    let mut file = open_target(&target, mode)?;

    let res = match payload {
        Payload::Json(value) => write_pretty_json(&mut file, value),
        Payload::Text(text) => file.write_all(text.as_bytes()),
        Payload::Bytes(bytes) => file.write_all(bytes),
    };
    res.map_err(io_ctx("write file", &target))?;

    debug!(path = %target.display(), "wrote file");
    Ok(target)
}

/// Like [`write`], but `serialize` fully controls what lands in the file.
pub fn write_with<F>(
    dir: &Path,
    name: &str,
    format: &str,
    mode: WriteMode,
    serialize: F,
) -> Result<PathBuf>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let format = WriteFormat::from_str(format)?;
    let target = composed(dir, name, format);
    let mut file = open_target(&target, mode)?;
    serialize(&mut file).map_err(io_ctx("write file", &target))?;
    debug!(path = %target.display(), "wrote file via callback");
    Ok(target)
}
