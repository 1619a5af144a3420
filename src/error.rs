//! Fatal build errors. Coverage gaps are not errors; they go to the
//! [`ErrorLog`](crate::model::ErrorLog).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("reading template {}: {source}", path.display())]
    ReadTemplate { path: PathBuf, source: io::Error },

    #[error("listing translations in {}: {source}", path.display())]
    ListTranslations { path: PathBuf, source: io::Error },

    #[error("reading dictionary {}: {source}", path.display())]
    ReadDictionary { path: PathBuf, source: io::Error },

    #[error("parsing dictionary {}: {source}", path.display())]
    ParseDictionary {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("dictionary {} is not a JSON object", path.display())]
    DictionaryNotObject { path: PathBuf },

    #[error("creating directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("writing {}: {source}", path.display())]
    WriteOutput { path: PathBuf, source: io::Error },

    #[error("{count} untranslated token(s) left in output")]
    UntranslatedTokens { count: usize },
}

pub type Result<T, E = BuildError> = std::result::Result<T, E>;
