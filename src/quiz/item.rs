// SPDX-License-Identifier: PMPL-1.0-or-later

//! The word currently on screen and the texts built around it.

use crate::catalog::Catalog;
use crate::error::{LingoError, Result};
use crate::translate::{TranslationService, Translator};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

pub const UNAVAILABLE: &str = "translation unavailable";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    pub language: String,
    pub category: String,
    pub word: Option<String>,
    pub translation: Option<String>,
    /// Recap of the previous word, shown above the next question.
    pub message: String,
    pub image: Option<PathBuf>,
    #[serde(skip)]
    last_index: Option<usize>,
}

impl QuizItem {
    pub fn new(language: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            category: category.into(),
            word: None,
            translation: None,
            message: "Begin!".to_string(),
            image: None,
            last_index: None,
        }
    }

    /// Move on to a random word from the category and translate it.
    ///
    /// Translation failures are logged and leave `translation` empty; only
    /// catalog and entropy problems are returned as errors.
    pub fn next_word<S: TranslationService>(
        &mut self,
        catalog: &Catalog,
        translator: &Translator<S>,
    ) -> Result<()> {
        let words = catalog
            .words(&self.category)
            .filter(|words| !words.is_empty())
            .ok_or_else(|| {
                LingoError::not_found(
                    catalog.root.join(&self.category),
                    "category has no words",
                )
            })?;

        let index = pick_index(words.len(), self.last_index, random_u64()?);
        let word = words[index].clone();

        let translation = match translator.translate_word(&word, &self.language) {
            Ok(text) => text,
            Err(err) => {
                warn!(word = %word, error = %err, "continuing without translation");
                None
            }
        };

        self.image = Some(catalog.image_path(&self.category, &word));
        self.last_index = Some(index);
        self.set_word(word, translation);
        Ok(())
    }

    /// Install `word` and its translation, and prepare the recap for it.
    pub fn set_word(&mut self, word: String, translation: Option<String>) {
        self.message = format!(
            "{} translated in {}\nwas {}!",
            capitalize(&word),
            capitalize(&self.language),
            translation.as_deref().unwrap_or(UNAVAILABLE)
        );
        self.word = Some(word);
        self.translation = translation;
    }

    pub fn question(&self) -> String {
        format!(
            "'{}' in {}\nmeans what in English?",
            self.translation.as_deref().unwrap_or(UNAVAILABLE),
            capitalize(&self.language)
        )
    }

    /// Compare a typed answer with the current word, ignoring case and
    /// surrounding whitespace.
    pub fn check(&self, answer: &str) -> bool {
        match &self.word {
            Some(word) => normalize_answer(answer) == *word,
            None => false,
        }
    }

    pub fn retry_prompt(&self, answer: &str) -> String {
        format!(
            "{} is incorrect! Try Again\n{}",
            normalize_answer(answer),
            self.question()
        )
    }
}

pub fn normalize_answer(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Pick a slot in `0..len` from `entropy`, never repeating `previous`
/// when there is another slot to take.
pub fn pick_index(len: usize, previous: Option<usize>, entropy: u64) -> usize {
    debug_assert!(len > 0);
    match previous {
        Some(prev) if len > 1 && prev < len => {
            let slot = (entropy % (len as u64 - 1)) as usize;
            if slot >= prev {
                slot + 1
            } else {
                slot
            }
        }
        _ => (entropy % len as u64) as usize,
    }
}

fn random_u64() -> Result<u64> {
    let mut buf = [0u8; 8];
    getrandom::getrandom(&mut buf).map_err(|err| {
        LingoError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("no entropy available: {}", err),
        ))
    })?;
    Ok(u64::from_le_bytes(buf))
}
