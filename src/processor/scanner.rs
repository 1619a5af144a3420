//! Name-token scanner.
//!
//! ```text
//! NameToken ::= "NAME_" [A-Za-z0-9_$]+
//! ```
//!
//! The scan is read-only; it only fills a [`FrequencyTable`].

use regex::Regex;
use std::sync::LazyLock;

use crate::model::{FrequencyTable, NAME_PREFIX};

pub static NAME_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"NAME_[A-Za-z0-9_$]+").expect("static NAME_ pattern"));

/// Count every `NAME_` token in `template`, keyed by the text after the prefix.
pub fn scan(template: &str) -> FrequencyTable {
    let mut table = FrequencyTable::default();
    for m in NAME_TOKEN.find_iter(template) {
        let name = &m.as_str()[NAME_PREFIX.len()..];
        *table.counts.entry(name.to_string()).or_insert(0) += 1;
    }
    table
}
