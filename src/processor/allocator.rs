//! Frequency-ranked short identifiers for name tokens.
//!
//! Rank `i` is written in a bijective numeral system: the first symbol is
//! taken from [`START_ALPHABET`] (never a digit) and any further symbols
//! from [`MIDDLE_ALPHABET`]. The first `S` ranks get one symbol, the next
//! `S * M` get two, and so on, where `S` and `M` are the alphabet sizes.
//! Ranks that share a suffix form a batch of `S` consecutive identifiers.

use std::cmp::Ordering;

use crate::model::{FrequencyTable, IdentifierTable, RankedEntry};

pub const START_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";
pub const MIDDLE_ALPHABET: &[u8] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// Most frequent first; equal counts fall back to ascending name order.
///
/// Names are unique table keys, so two distinct entries never compare
/// equal and the resulting order is total.
pub fn compare_entries(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.occurrences
        .cmp(&a.occurrences)
        .then_with(|| a.name.cmp(&b.name))
}

pub fn rank(table: &FrequencyTable) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = table
        .counts
        .iter()
        .map(|(name, &occurrences)| RankedEntry {
            name: name.clone(),
            occurrences,
        })
        .collect();
    entries.sort_by(compare_entries);
    entries
}

/// The identifier for 0-based rank `index`.
pub fn identifier_for(index: usize) -> String {
    let start = START_ALPHABET.len();
    let middle = MIDDLE_ALPHABET.len();

    let mut id = String::new();
    id.push(START_ALPHABET[index % start] as char);

    // bijective digits, least significant first
    let mut rest = index / start;
    while rest > 0 {
        rest -= 1;
        id.push(MIDDLE_ALPHABET[rest % middle] as char);
        rest /= middle;
    }
    id
}

/// Rank every token and give each one its identifier.
pub fn allocate(table: &FrequencyTable) -> IdentifierTable {
    let ids = rank(table)
        .into_iter()
        .enumerate()
        .map(|(index, entry)| (entry.name, identifier_for(index)))
        .collect();
    IdentifierTable { ids }
}
