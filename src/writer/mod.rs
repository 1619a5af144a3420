//! Static-hosting layout: the primary language at the root, every other
//! language under `/<code>/`.

use std::path::{Path, PathBuf};

use crate::error::{BuildError, Result};
use crate::files;
use crate::model::LanguagePage;

pub const PAGE_FILE: &str = "index.html";

pub fn output_dir(root: &Path, language: &str, primary_language: &str) -> PathBuf {
    if language == primary_language {
        root.to_path_buf()
    } else {
        root.join(language)
    }
}

pub fn ensure_dir(dir: &Path) -> Result<()> {
    files::make_dir(dir).map_err(|source| BuildError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write `page` into `dir`, which must already exist.
pub fn emit(page: &LanguagePage, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(PAGE_FILE);
    files::write_file(&path, &page.html).map_err(|source| BuildError::WriteOutput {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
