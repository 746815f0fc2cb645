//! Filesystem helpers shared by both pipelines

use std::io;
use std::path::Path;

use crate::error::{Error, Result};

/// Read a file's raw bytes, distinguishing a missing file from other
/// read failures.
pub fn read_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => Error::not_found(path),
        _ => Error::io(path, &err),
    })
}

/// Write raw bytes to `path`, creating or truncating the file.
pub fn write_bytes(path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, bytes).map_err(|err| Error::io(path, &err))
}

/// Create a directory and any missing parents; already present is success.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::create_dir_all(path).map_err(|err| Error::io(path, &err))
}
