//! Per-language resolution of `LANG_` tokens on the shared minified document.
//!
//! ```text
//! LangToken ::= "LANG_" [A-Za-z0-9_]* ( "\ " )?
//! ```
//!
//! The optional backslash-space ends a token that is directly followed by
//! word characters; it is consumed along with the token.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::{Dictionary, LanguagePage};

pub static LANG_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"LANG_([A-Za-z0-9_]*)(?:\\ )?").expect("static LANG_ pattern"));

pub fn missing_translation(token: &str, language: &str) -> String {
    format!("ERR: no translation exists for {token} in {language}.json")
}

/// Substitute every `LANG_` token of `document` from `dictionary`.
///
/// Tokens whose key is absent or not a string stay verbatim and produce one
/// warning each. `document` is only read, so any number of languages can
/// run against it at once.
pub fn translate(document: &str, language: &str, dictionary: &Dictionary) -> LanguagePage {
    let mut warnings = Vec::new();
    let html = LANG_TOKEN
        .replace_all(document, |caps: &regex::Captures| {
            let token = &caps[0];
            match dictionary.text(&caps[1]) {
                Some(text) => text.to_string(),
                None => {
                    warnings.push(missing_translation(token, language));
                    token.to_string()
                }
            }
        })
        .into_owned();

    LanguagePage {
        language: language.to_string(),
        html,
        warnings,
    }
}
