use std::fs;
use std::path::Path;

use pagelocalizer::build::{BuildConfig, build_site};
use pagelocalizer::error::BuildError;
use pagelocalizer::processor::minifier::{HtmlMinifier, Identity};
use tempfile::TempDir;

const TEMPLATE: &str = "<p>NAME_LANG_SPACE_SEP_LIST</p><span>LANG_GREETING</span>";

/// Lay out `index.src.html` and `translations/` in a fresh directory.
fn site(template: &str, translations: &[(&str, &str)]) -> (TempDir, BuildConfig) {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    fs::write(root.join("index.src.html"), template).unwrap();
    fs::create_dir(root.join("translations")).unwrap();
    for (name, body) in translations {
        fs::write(root.join("translations").join(name), body).unwrap();
    }
    let config = BuildConfig {
        template: root.join("index.src.html"),
        translations: root.join("translations"),
        output: root.join("gh-pages"),
        ..BuildConfig::default()
    };
    (tmp, config)
}

fn page(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join("gh-pages").join(rel)).unwrap()
}

#[test]
fn builds_every_language() {
    let (tmp, config) = site(
        TEMPLATE,
        &[
            ("en.json", r#"{"GREETING":"Hello"}"#),
            ("fr.json", r#"{"GREETING":"Bonjour"}"#),
            ("notes.txt", "ignored"),
        ],
    );

    let report = build_site(&config, &HtmlMinifier::default()).unwrap();

    assert_eq!(report.languages.codes, vec!["en", "fr"]);
    assert!(report.errors.is_empty());
    assert_eq!(report.written.len(), 2);

    let en = page(tmp.path(), "index.html");
    assert!(en.contains("en fr"), "{en}");
    assert!(en.contains("Hello"), "{en}");

    let fr = page(tmp.path(), "fr/index.html");
    assert!(fr.contains("en fr"), "{fr}");
    assert!(fr.contains("Bonjour"), "{fr}");
    assert!(!tmp.path().join("gh-pages/en").exists());
}

#[test]
fn unlisted_name_token_gets_short_identifier() {
    // `SPACE_SEP_LIST` is not a whitelisted name; only `LANG_SPACE_SEP_LIST` is
    let (tmp, config) = site(
        "<p>NAME_SPACE_SEP_LIST</p><span>LANG_GREETING</span>",
        &[
            ("en.json", r#"{"GREETING":"Hello"}"#),
            ("fr.json", r#"{"GREETING":"Bonjour"}"#),
        ],
    );

    let report = build_site(&config, &Identity).unwrap();
    assert!(report.errors.is_empty());

    assert_eq!(page(tmp.path(), "index.html"), "<p>A</p><span>Hello</span>");
    assert_eq!(page(tmp.path(), "fr/index.html"), "<p>A</p><span>Bonjour</span>");
}

#[test]
fn missing_translation_is_a_warning() {
    let (tmp, config) = site(
        TEMPLATE,
        &[("en.json", r#"{"GREETING":"Hello"}"#), ("fr.json", "{}")],
    );

    let report = build_site(&config, &HtmlMinifier::default()).unwrap();

    let fr = page(tmp.path(), "fr/index.html");
    assert!(fr.contains("LANG_GREETING"), "{fr}");
    assert_eq!(report.errors.len(), 1);
    let line = &report.errors.lines()[0];
    assert!(line.contains("GREETING") && line.contains("fr"), "{line}");

    // the other language is unaffected
    assert!(page(tmp.path(), "index.html").contains("Hello"));
}

#[test]
fn strict_mode_fails_on_warnings() {
    let (tmp, mut config) = site(TEMPLATE, &[("en.json", "{}")]);
    config.strict = true;

    let err = build_site(&config, &Identity).unwrap_err();
    assert!(matches!(err, BuildError::UntranslatedTokens { count: 1 }));
    // pages are still written
    assert!(page(tmp.path(), "index.html").contains("LANG_GREETING"));
}

#[test]
fn page_language_and_empty_text_resolve_per_language() {
    let (tmp, config) = site(
        r#"<html lang="NAME_PAGE_LANGUAGE"><b>NAME_NULL_EMPTY_TEXT</b><i>NAME_PRIMARY_LANGUAGE</i>"#,
        &[("de.json", "{}"), ("en.json", "{}")],
    );

    let report = build_site(&config, &Identity).unwrap();
    assert!(report.errors.is_empty());

    assert_eq!(
        page(tmp.path(), "de/index.html"),
        r#"<html lang="de"><b></b><i>en</i>"#
    );
    assert_eq!(
        page(tmp.path(), "index.html"),
        r#"<html lang="en"><b></b><i>en</i>"#
    );
}

#[test]
fn broken_dictionary_aborts_but_other_pages_are_written() {
    let (tmp, config) = site(
        TEMPLATE,
        &[("en.json", r#"{"GREETING":"Hello"}"#), ("fr.json", "{oops")],
    );

    let err = build_site(&config, &Identity).unwrap_err();
    assert!(matches!(err, BuildError::ParseDictionary { .. }), "{err}");
    assert!(page(tmp.path(), "index.html").contains("Hello"));
}

#[test]
fn missing_template_is_fatal() {
    let (_tmp, mut config) = site(TEMPLATE, &[("en.json", "{}")]);
    config.template = config.template.with_file_name("nope.html");

    let err = build_site(&config, &Identity).unwrap_err();
    assert!(matches!(err, BuildError::ReadTemplate { .. }));
}

#[test]
fn empty_translations_dir_writes_nothing() {
    let (tmp, config) = site(TEMPLATE, &[]);
    let report = build_site(&config, &Identity).unwrap();
    assert!(report.languages.is_empty());
    assert!(report.written.is_empty());
    assert!(!tmp.path().join("gh-pages").exists());
}
