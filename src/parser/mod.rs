use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::error::{BuildError, Result};
use crate::files;
use crate::model::{Dictionary, LanguageSet, NULL_EMPTY_TEXT_KEY, PAGE_LANGUAGE_KEY};

static TRANSLATION_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)\.json$").expect("static translation file pattern"));

/// Language codes from a directory listing: one per `<code>.json`, sorted.
///
/// Everything else in the listing is ignored.
pub fn languages_from_listing<I, S>(file_names: I) -> LanguageSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut codes: Vec<String> = file_names
        .into_iter()
        .filter_map(|name| {
            TRANSLATION_FILE
                .captures(name.as_ref())
                .map(|caps| caps[1].to_string())
        })
        .collect();
    codes.sort();
    LanguageSet { codes }
}

pub fn discover_languages(dir: &Path) -> Result<LanguageSet> {
    let listing = files::list_dir(dir).map_err(|source| BuildError::ListTranslations {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(languages_from_listing(listing))
}

pub fn dictionary_path(dir: &Path, language: &str) -> PathBuf {
    dir.join(format!("{language}.json"))
}

/// Parse a translation file body. The top level must be a JSON object.
pub fn parse_dictionary(json: &str, path: &Path) -> Result<Dictionary> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|source| BuildError::ParseDictionary {
            path: path.to_path_buf(),
            source,
        })?;
    if !value.is_object() {
        return Err(BuildError::DictionaryNotObject {
            path: path.to_path_buf(),
        });
    }
    serde_json::from_value(value).map_err(|source| BuildError::ParseDictionary {
        path: path.to_path_buf(),
        source,
    })
}

/// Add the two computed entries every page can reference. They override
/// whatever the file says.
pub fn augment(dictionary: &mut Dictionary, language: &str) {
    dictionary.insert(PAGE_LANGUAGE_KEY, language);
    dictionary.insert(NULL_EMPTY_TEXT_KEY, "");
}

/// Read, parse and augment `<dir>/<language>.json`.
pub fn load_dictionary(dir: &Path, language: &str) -> Result<Dictionary> {
    let path = dictionary_path(dir, language);
    let json = files::read_file(&path).map_err(|source| BuildError::ReadDictionary {
        path: path.clone(),
        source,
    })?;
    let mut dictionary = parse_dictionary(&json, &path)?;
    augment(&mut dictionary, language);
    Ok(dictionary)
}
