// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translator adapter
//!
//! Resolves a human-readable language name to a code and hands the word
//! to a [`TranslationService`]. An unknown name yields `Ok(None)`; service
//! failures propagate as errors with no retry.

mod google;

pub use google::{GoogleTranslate, DEFAULT_ENDPOINT};

use crate::error::Result;
use crate::i18n::LanguageIndex;
use tracing::{debug, warn};

/// Source language of every quiz word.
pub const SOURCE_LANGUAGE: &str = "en";

/// The one operation the quiz needs from a translation backend.
pub trait TranslationService {
    fn translate(&self, text: &str, source: &str, dest: &str) -> Result<String>;
}

impl<T: TranslationService + ?Sized> TranslationService for &T {
    fn translate(&self, text: &str, source: &str, dest: &str) -> Result<String> {
        (**self).translate(text, source, dest)
    }
}

impl<T: TranslationService + ?Sized> TranslationService for Box<T> {
    fn translate(&self, text: &str, source: &str, dest: &str) -> Result<String> {
        (**self).translate(text, source, dest)
    }
}

pub struct Translator<S> {
    index: LanguageIndex,
    service: S,
}

impl<S: TranslationService> Translator<S> {
    pub fn new(index: LanguageIndex, service: S) -> Self {
        Self { index, service }
    }

    /// Translator over the full reference language table.
    pub fn with_reference(service: S) -> Self {
        Self::new(LanguageIndex::reference(), service)
    }

    /// Translate an English `word` into the language called `language`.
    ///
    /// Returns `Ok(None)` when `language` is not a known name. The service
    /// result is returned verbatim.
    pub fn translate_word(&self, word: &str, language: &str) -> Result<Option<String>> {
        let Some(code) = self.index.code_for(language) else {
            debug!(language, "no code for language name");
            return Ok(None);
        };
        debug!(word, code, "translating");
        match self.service.translate(word, SOURCE_LANGUAGE, code) {
            Ok(text) => Ok(Some(text)),
            Err(err) => {
                warn!(word, code, error = %err, "translation failed");
                Err(err)
            }
        }
    }
}
