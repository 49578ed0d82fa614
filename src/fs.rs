use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use log::debug;

use crate::error::{Error, Result};

const SEPARATOR_REPLACEMENT: &str = "-";

const DOT_REPLACEMENT: &str = "_";

/// Replaces path separators so a name always stays a single path component.
///
/// `.` and `..` would point at the current or parent directory, so they are replaced too.
pub fn sanitize_component(name: &str) -> String {
    match name {
        "." | ".." => DOT_REPLACEMENT.to_string(),
        _ => name.replace(['/', '\\'], SEPARATOR_REPLACEMENT),
    }
}

/// `root/artist/"{year} {title}"`, trimmed so a missing year leaves just the title.
pub fn album_directory(root: &Path, artist: &str, year: Option<&str>, title: &str) -> PathBuf {
    let name = format!("{} {}", year.unwrap_or_default(), title);
    root.join(sanitize_component(artist))
        .join(sanitize_component(name.trim()))
}

/// Creates a directory and its missing parents.
pub fn create_directory(path: &Path) -> Result<()> {
    debug!("Creating directory {}", path.display());
    fs::create_dir_all(path).map_err(|e| Error::filesystem(path, e))
}

/// Creates or truncates `path` and writes all of `bytes` to it.
///
/// The file handle is dropped before returning, on success and on failure.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = fs::File::create(path).map_err(|e| Error::filesystem(path, e))?;
    file.write_all(bytes)
        .and_then(|_| file.flush())
        .map_err(|e| Error::filesystem(path, e))
}
