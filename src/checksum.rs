//! MD5 checksum sidecars
//!
//! A configuration file `P` may be accompanied by `P.md5` holding the hex
//! MD5 digest of its content. The digest guards against accidental edits and
//! truncation, not against tampering.

use crate::error::{Error, Result};
use md5::{Digest, Md5};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extension appended to a file path to locate its checksum sidecar
pub const SIDECAR_EXTENSION: &str = "md5";

/// Compute the lowercase hex MD5 digest of `content`.
pub fn compute(content: &[u8]) -> String {
    hex::encode(Md5::digest(content))
}

/// Check `content` against the checksum text stored in a sidecar.
///
/// Surrounding whitespace in `stored` is ignored; the comparison itself is
/// case-sensitive.
pub fn verify(content: &[u8], stored: &str) -> bool {
    compute(content) == stored.trim()
}

/// Path of the sidecar for `path`: `groups.yaml` becomes `groups.yaml.md5`.
pub fn sidecar_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(SIDECAR_EXTENSION);
    PathBuf::from(name)
}

/// Check `content`, read from `path`, against the sidecar of `path`.
///
/// # Errors
///
/// Returns [`Error::Read`] naming the sidecar if it cannot be read, and
/// [`Error::Integrity`] naming `path` if the digests differ.
pub fn verify_sidecar(path: &Path, content: &[u8]) -> Result<()> {
    let sidecar = sidecar_path(path);
    let stored = std::fs::read_to_string(&sidecar).map_err(|e| Error::read(&sidecar, e))?;
    if verify(content, &stored) {
        Ok(())
    } else {
        Err(Error::Integrity {
            path: path.to_path_buf(),
            expected: stored.trim().to_string(),
            actual: compute(content),
        })
    }
}

/// Compute the checksum of the file at `path` and write it to its sidecar.
///
/// Returns the sidecar path.
///
/// # Errors
///
/// Returns [`Error::Read`] if the file cannot be read or the sidecar cannot
/// be written.
pub fn write_sidecar(path: &Path) -> Result<PathBuf> {
    let content = std::fs::read(path).map_err(|e| Error::read(path, e))?;
    let sidecar = sidecar_path(path);
    std::fs::write(&sidecar, format!("{}\n", compute(&content)))
        .map_err(|e| Error::read(&sidecar, e))?;
    Ok(sidecar)
}
