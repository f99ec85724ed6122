// SPDX-License-Identifier: PMPL-1.0-or-later

//! Two-way code <-> name index, built once per session.

use super::table::LanguageTable;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct LanguageIndex {
    by_code: HashMap<String, String>,
    by_name: HashMap<String, String>,
}

impl LanguageIndex {
    /// Build the index. A name shared by several codes resolves to the
    /// first of them in table order.
    pub fn new(table: &LanguageTable) -> Self {
        let mut index = Self::default();
        for lang in table.iter() {
            index
                .by_code
                .entry(lang.code.clone())
                .or_insert_with(|| lang.name.clone());
            index
                .by_name
                .entry(lang.name.clone())
                .or_insert_with(|| lang.code.clone());
        }
        index
    }

    /// Index over the full reference table.
    pub fn reference() -> Self {
        Self::new(&LanguageTable::reference())
    }

    /// Exact, case-sensitive lookup of a language name.
    pub fn code_for(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    pub fn name_for(&self, code: &str) -> Option<&str> {
        self.by_code.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}
