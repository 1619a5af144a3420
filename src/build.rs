//! Build orchestration.
//!
//! Pipeline: discover languages ‖ read template → prepare (once) →
//! per-language fan-out (mkdir ‖ load dictionary → translate → write) →
//! flush warnings.

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{BuildError, Result};
use crate::model::{BuildReport, ErrorLog};
use crate::processor::minifier::Minifier;
use crate::processor::{self, values};
use crate::{files, parser, writer};

pub const DEFAULT_PRIMARY_LANGUAGE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub template: PathBuf,
    pub translations: PathBuf,
    pub output: PathBuf,
    pub primary_language: String,
    /// Fail the build when any token is left untranslated.
    pub strict: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            template: PathBuf::from("index.src.html"),
            translations: PathBuf::from("translations"),
            output: PathBuf::from("gh-pages"),
            primary_language: DEFAULT_PRIMARY_LANGUAGE.to_string(),
            strict: false,
        }
    }
}

/// How one language's unit of work settled.
struct LanguageOutcome {
    warnings: Vec<String>,
    written: Result<PathBuf>,
}

/// Regenerate every page from scratch.
///
/// All language units settle before anything is reported: coverage
/// warnings are flushed to stderr first, then the first fatal error (in
/// language order), if any, is returned.
pub fn build_site(config: &BuildConfig, minifier: &dyn Minifier) -> Result<BuildReport> {
    let (languages, template) = rayon::join(
        || parser::discover_languages(&config.translations),
        || read_template(&config.template),
    );
    let (languages, template) = (languages?, template?);
    info!(count = languages.len(), languages = %languages.space_separated(), "discovered languages");

    let prepared = processor::prepare(&template, &languages, &config.primary_language, minifier);
    debug!(
        identifiers = prepared.identifiers.ids.len(),
        bytes = prepared.minified.len(),
        "prepared shared document"
    );
    let minified = prepared.minified.as_str();

    let outcomes: Vec<LanguageOutcome> = languages
        .codes
        .par_iter()
        .map(|language| build_language(config, minified, language))
        .collect();

    let mut errors = ErrorLog::default();
    let mut written = Vec::with_capacity(outcomes.len());
    let mut first_failure = None;
    for outcome in outcomes {
        errors.extend(outcome.warnings);
        match outcome.written {
            Ok(path) => written.push(path),
            Err(e) => {
                first_failure.get_or_insert(e);
            }
        }
    }

    flush(&errors);

    if let Some(e) = first_failure {
        return Err(e);
    }
    if config.strict && !errors.is_empty() {
        return Err(BuildError::UntranslatedTokens {
            count: errors.len(),
        });
    }

    Ok(BuildReport {
        languages,
        written,
        errors,
    })
}

fn read_template(path: &Path) -> Result<String> {
    files::read_file(path).map_err(|source| BuildError::ReadTemplate {
        path: path.to_path_buf(),
        source,
    })
}

fn build_language(config: &BuildConfig, minified: &str, language: &str) -> LanguageOutcome {
    let dir = writer::output_dir(&config.output, language, &config.primary_language);

    let (made, dictionary) = rayon::join(
        || writer::ensure_dir(&dir),
        || parser::load_dictionary(&config.translations, language),
    );
    let dictionary = match made.and(dictionary) {
        Ok(d) => d,
        Err(e) => {
            return LanguageOutcome {
                warnings: Vec::new(),
                written: Err(e),
            };
        }
    };

    let page = values::translate(minified, language, &dictionary);
    debug!(
        language = %page.language,
        missing = page.warnings.len(),
        "translated page"
    );
    let written = writer::emit(&page, &dir);
    LanguageOutcome {
        warnings: page.warnings,
        written,
    }
}

fn flush(errors: &ErrorLog) {
    if errors.is_empty() {
        return;
    }
    warn!(count = errors.len(), "untranslated tokens left in output");
    eprintln!("{}", errors.render());
}

