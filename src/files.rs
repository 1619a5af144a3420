//! Filesystem primitives that report progress through `tracing`.
//!
//! Every wrapper logs once before the call and once after it completes, so
//! overlapping per-language work shows up as independent events instead of
//! sharing a terminal cursor.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

pub fn read_file(path: &Path) -> io::Result<String> {
    debug!(path = %path.display(), "Reading...");
    let content = fs::read_to_string(path)?;
    info!(
        path = %path.display(),
        bytes = content.len(),
        "Finished reading {} bytes from {}",
        content.len(),
        path.display()
    );
    Ok(content)
}

/// File names (not paths) of every entry in `dir`.
pub fn list_dir(dir: &Path) -> io::Result<Vec<String>> {
    debug!(path = %dir.display(), "Listing...");
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    info!(
        path = %dir.display(),
        files = names.len(),
        "Finished listing {} files in {}/",
        names.len(),
        dir.display()
    );
    Ok(names)
}

/// `mkdir -p`
pub fn make_dir(dir: &Path) -> io::Result<()> {
    debug!(path = %dir.display(), "Making directory...");
    fs::create_dir_all(dir)?;
    info!(path = %dir.display(), "Finished making directory {}", dir.display());
    Ok(())
}

pub fn write_file(path: &Path, data: &str) -> io::Result<()> {
    debug!(path = %path.display(), "Writing...");
    fs::write(path, data)?;
    info!(
        path = %path.display(),
        bytes = data.len(),
        "Finished writing {} bytes to {}",
        data.len(),
        path.display()
    );
    Ok(())
}
