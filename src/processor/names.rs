//! Build-level resolution of `NAME_` tokens.

use crate::model::{
    IdentifierTable, LANG_PREFIX, LanguageSet, NAME_PREFIX, NULL_EMPTY_TEXT_KEY, NameBindings,
    PAGE_LANGUAGE_KEY,
};
use crate::processor::scanner::NAME_TOKEN;

/// Whitelisted name tokens with build-level values.
pub const LANG_SPACE_SEP_LIST: &str = "LANG_SPACE_SEP_LIST";
pub const LANG_BAR_SEP_LIST: &str = "LANG_BAR_SEP_LIST";
pub const PRIMARY_LANGUAGE: &str = "PRIMARY_LANGUAGE";

/// Values for the whitelist. `PAGE_LANGUAGE` and `NULL_EMPTY_TEXT` turn into
/// `LANG_` tokens so they survive minification and resolve per language.
pub fn bindings(languages: &LanguageSet, primary_language: &str) -> NameBindings {
    let deferred = |key: &str| format!("{LANG_PREFIX}{key}");
    let values = [
        (LANG_SPACE_SEP_LIST, languages.space_separated()),
        (LANG_BAR_SEP_LIST, languages.bar_separated()),
        (PRIMARY_LANGUAGE, primary_language.to_string()),
        (PAGE_LANGUAGE_KEY, deferred(PAGE_LANGUAGE_KEY)),
        (NULL_EMPTY_TEXT_KEY, deferred(NULL_EMPTY_TEXT_KEY)),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();
    NameBindings { values }
}

/// Replace every `NAME_` token: whitelisted names take their bound value,
/// every other name takes its allocated short identifier.
///
/// `ids` must come from scanning the same `template`; a name missing from
/// both tables is left as written.
pub fn resolve(template: &str, bindings: &NameBindings, ids: &IdentifierTable) -> String {
    NAME_TOKEN
        .replace_all(template, |caps: &regex::Captures| {
            let token = &caps[0];
            let name = &token[NAME_PREFIX.len()..];
            bindings
                .get(name)
                .or_else(|| ids.get(name))
                .unwrap_or(token)
                .to_string()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::{allocator, scanner};

    fn langs(codes: &[&str]) -> LanguageSet {
        LanguageSet {
            codes: codes.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn run(template: &str, codes: &[&str]) -> String {
        let ids = allocator::allocate(&scanner::scan(template));
        resolve(template, &bindings(&langs(codes), "en"), &ids)
    }

    #[test]
    fn primary_language_is_substituted() {
        let out = run(r#"<html lang="NAME_PRIMARY_LANGUAGE">"#, &["en", "fr"]);
        assert_eq!(out, r#"<html lang="en">"#);
        assert!(!out.contains("NAME_PRIMARY_LANGUAGE"));
    }

    #[test]
    fn language_lists_are_joined() {
        let out = run("NAME_LANG_SPACE_SEP_LIST/NAME_LANG_BAR_SEP_LIST", &["de", "en", "fr"]);
        assert_eq!(out, "de en fr/de|en|fr");
    }

    #[test]
    fn deferred_names_become_lang_tokens() {
        let out = run("NAME_PAGE_LANGUAGE NAME_NULL_EMPTY_TEXT", &["en"]);
        assert_eq!(out, "LANG_PAGE_LANGUAGE LANG_NULL_EMPTY_TEXT");
    }

    #[test]
    fn other_names_take_their_short_identifier() {
        // `btn` appears twice, `nav` once: btn ranks first
        let out = run(r#"<a class="NAME_nav NAME_btn">NAME_btn</a>"#, &["en"]);
        assert_eq!(out, r#"<a class="B A">A</a>"#);
    }

    #[test]
    fn unknown_name_without_identifier_is_kept() {
        let out = resolve("NAME_ghost", &NameBindings::default(), &IdentifierTable::default());
        assert_eq!(out, "NAME_ghost");
    }

    #[test]
    fn lang_tokens_are_untouched() {
        assert_eq!(run("LANG_GREETING", &["en"]), "LANG_GREETING");
    }
}
