// SPDX-License-Identifier: PMPL-1.0-or-later

//! Ordered code -> name language tables and the block-list filter.

use super::reference::{REFERENCE_LANGUAGES, UNSUPPORTED_CODES};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A code -> name language mapping that keeps insertion order.
///
/// Order matters only for display (the language grid); lookups are by
/// code. Codes are unique: inserting a code twice keeps the first entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTable {
    entries: Vec<Language>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}

impl LanguageTable {
    /// The full table published by the translation service.
    pub fn reference() -> Self {
        Self::from_pairs(REFERENCE_LANGUAGES.iter().copied())
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut table = Self::default();
        for (code, name) in pairs {
            table.insert(code, name);
        }
        table
    }

    fn insert(&mut self, code: &str, name: &str) {
        if self.contains_code(code) {
            return;
        }
        self.entries.push(Language {
            code: code.to_string(),
            name: name.to_string(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.entries.iter().any(|lang| lang.code == code)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.iter().any(|lang| lang.name == name)
    }

    pub fn name(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|lang| lang.code == code)
            .map(|lang| lang.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|lang| lang.name.as_str()).collect()
    }
}

/// Remove every block-listed code from `table`.
///
/// The input is left untouched; codes in `blocklist` that are absent
/// from `table` are ignored.
pub fn filter_languages(table: &LanguageTable, blocklist: &[&str]) -> LanguageTable {
    let entries: Vec<Language> = table
        .iter()
        .filter(|lang| !blocklist.contains(&lang.code.as_str()))
        .cloned()
        .collect();
    debug!(
        from = table.len(),
        to = entries.len(),
        "filtered language table"
    );
    LanguageTable { entries }
}

/// Languages the quiz offers: the reference table minus [`UNSUPPORTED_CODES`].
pub fn supported_languages() -> LanguageTable {
    filter_languages(&LanguageTable::reference(), UNSUPPORTED_CODES)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LanguageTable {
        LanguageTable::from_pairs([
            ("de", "german"),
            ("es", "spanish"),
            ("hi", "hindi"),
            ("en", "english"),
        ])
    }

    #[test]
    fn supported_languages_drop_the_block_list() {
        let langs = supported_languages();
        assert_eq!(langs.len(), 84);
        assert!(langs.contains_name("german"));
        assert!(langs.contains_name("spanish"));
        assert!(!langs.contains_name("english"));
        assert!(!langs.contains_name("hindi"));
    }

    #[test]
    fn filter_keeps_values_and_order() {
        let filtered = filter_languages(&sample(), &["hi", "en"]);
        let codes: Vec<&str> = filtered.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["de", "es"]);
        assert_eq!(filtered.name("de"), Some("german"));
        assert_eq!(filtered.name("es"), Some("spanish"));
    }

    #[test]
    fn filter_does_not_touch_input() {
        let table = sample();
        let _ = filter_languages(&table, &["de"]);
        assert_eq!(table, sample());
    }

    #[test]
    fn filter_size_is_m_minus_k() {
        let table = LanguageTable::reference();
        let blocklist = ["de", "fr", "it"];
        let filtered = filter_languages(&table, &blocklist);
        assert_eq!(filtered.len(), table.len() - blocklist.len());
        for code in blocklist {
            assert!(!filtered.contains_code(code));
        }
    }

    #[test]
    fn absent_block_list_codes_are_ignored() {
        let filtered = filter_languages(&sample(), &["xx", "de"]);
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn duplicate_codes_keep_first_entry() {
        let table = LanguageTable::from_pairs([("de", "german"), ("de", "deutsch")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.name("de"), Some("german"));
    }
}
