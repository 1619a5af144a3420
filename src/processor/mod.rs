//! The functional core: token compaction before minification, language
//! substitution after it.
pub mod allocator;
pub mod minifier;
pub mod names;
pub mod scanner;
pub mod values;

use tracing::debug;

use crate::model::{IdentifierTable, LanguageSet};
use minifier::Minifier;

/// The language-independent result of the build-level passes.
#[derive(Debug, Clone)]
pub struct PreparedDocument {
    pub identifiers: IdentifierTable,
    /// Name-resolved and minified; shared read-only by every language.
    pub minified: String,
}

/// Runs every build-level pass once: scan → allocate → resolve names → minify.
pub fn prepare(
    template: &str,
    languages: &LanguageSet,
    primary_language: &str,
    minifier: &dyn Minifier,
) -> PreparedDocument {
    let frequencies = scanner::scan(template);
    debug!(distinct = frequencies.len(), "scanned name tokens");

    let identifiers = allocator::allocate(&frequencies);
    let bindings = names::bindings(languages, primary_language);
    let resolved = names::resolve(template, &bindings, &identifiers);

    let minified = minifier::minify_document(minifier, &resolved);
    debug!(
        before = resolved.len(),
        after = minified.len(),
        "minified template"
    );

    PreparedDocument {
        identifiers,
        minified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::minifier::Identity;

    #[test]
    fn prepare_resolves_names_and_keeps_lang_tokens() {
        let languages = LanguageSet {
            codes: vec!["en".into(), "fr".into()],
        };
        let doc = prepare(
            "<p>NAME_LANG_SPACE_SEP_LIST</p><span lang=NAME_PAGE_LANGUAGE>LANG_GREETING</span>",
            &languages,
            "en",
            &Identity,
        );
        assert_eq!(
            doc.minified,
            "<p>en fr</p><span lang=LANG_PAGE_LANGUAGE>LANG_GREETING</span>"
        );
        assert_eq!(doc.identifiers.ids.len(), 2);
    }
}
