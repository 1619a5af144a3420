use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::PathBuf;

/// Prefix of tokens resolved once per build.
pub const NAME_PREFIX: &str = "NAME_";
/// Prefix of tokens resolved once per language.
pub const LANG_PREFIX: &str = "LANG_";

/// Key injected into every dictionary with the page's own language code.
pub const PAGE_LANGUAGE_KEY: &str = "PAGE_LANGUAGE";
/// Key injected into every dictionary with an empty replacement.
pub const NULL_EMPTY_TEXT_KEY: &str = "NULL_EMPTY_TEXT";

/// ─────────────────────────────────────────────────────
/// Name-token side
/// ─────────────────────────────────────────────────────

/// Occurrence count of every distinct `NAME_` token, keyed by the part
/// after the prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    pub counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn count(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// One row of the frequency-ranked list handed to identifier assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub name: String,
    pub occurrences: usize,
}

/// Token name -> short identifier, one per distinct name token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierTable {
    pub ids: HashMap<String, String>,
}

impl IdentifierTable {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.ids.get(name).map(String::as_str)
    }
}

/// Build-level values for the fixed whitelist of well-known name tokens.
///
/// Kept apart from [`IdentifierTable`] so the two token families never share
/// a map; the resolver consults this first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameBindings {
    pub values: HashMap<String, String>,
}

impl NameBindings {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// ─────────────────────────────────────────────────────
/// Language side
/// ─────────────────────────────────────────────────────

/// Language codes discovered from `<code>.json` file stems, sorted by code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageSet {
    pub codes: Vec<String>,
}

impl LanguageSet {
    pub fn space_separated(&self) -> String {
        self.codes.join(" ")
    }

    pub fn bar_separated(&self) -> String {
        self.codes.join("|")
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Flat `LANG_` key -> replacement mapping for one language.
///
/// Values are kept as raw JSON so that non-string entries can be reported
/// instead of rejected at load time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    pub entries: Map<String, Value>,
}

impl Dictionary {
    /// The replacement for `key`, only when it exists and is a JSON string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.entries
            .insert(key.to_string(), Value::String(value.into()));
    }
}

/// Append-only list of coverage warnings, flushed once per build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorLog {
    lines: Vec<String>,
}

impl ErrorLog {
    pub fn extend(&mut self, lines: impl IntoIterator<Item = String>) {
        self.lines.extend(lines);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// The newline-joined diagnostic block printed at the end of a build.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

/// Fully translated output for one language, ready for the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePage {
    pub language: String,
    pub html: String,
    pub warnings: Vec<String>,
}

/// What a finished build produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub languages: LanguageSet,
    pub written: Vec<PathBuf>,
    pub errors: ErrorLog,
}
