// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end quiz sessions driven by scripted input

use lingo_basics::catalog::Catalog;
use lingo_basics::i18n::supported_languages;
use lingo_basics::quiz::QuizTerminal;
use lingo_basics::translate::{TranslationService, Translator};
use lingo_basics::{LingoError, Result};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

struct German;

impl TranslationService for German {
    fn translate(&self, text: &str, _source: &str, dest: &str) -> Result<String> {
        assert_eq!(dest, "de");
        Ok(match text {
            "cat" => "Katze".to_string(),
            "Choose a category" => "Wähle eine Kategorie".to_string(),
            other => other.to_string(),
        })
    }
}

struct Offline;

impl TranslationService for Offline {
    fn translate(&self, _: &str, _: &str, _: &str) -> Result<String> {
        Err(LingoError::Service {
            status: 503,
            message: "offline".to_string(),
        })
    }
}

fn one_word_catalog(dir: &TempDir) -> Catalog {
    let animals = dir.path().join("animals");
    fs::create_dir_all(&animals).unwrap();
    fs::write(animals.join("cat.jpeg"), b"").unwrap();
    Catalog::build(dir.path()).unwrap()
}

fn play<S: TranslationService>(quiz: &mut QuizTerminal<S>, script: &str) -> String {
    let mut out = Vec::new();
    quiz.run_with(Cursor::new(script.to_string()), &mut out)
        .expect("session should finish");
    String::from_utf8(out).unwrap()
}

#[test]
fn test_session_full_round() {
    let dir = TempDir::new().unwrap();
    let translator = Translator::with_reference(German);
    let mut quiz =
        QuizTerminal::new(one_word_catalog(&dir), supported_languages(), translator, 7)
            .without_clearing();

    let output = play(&mut quiz, "\ngerman\n1\ndog\n CAT \n:quit\n");

    assert!(output.contains("A Language Learning Game"));
    assert!(output.contains("German"));
    assert!(output.contains("Wähle eine Kategorie"));
    assert!(output.contains("Begin!"));
    assert!(output.contains("'Katze' in German"));
    assert!(output.contains("dog is incorrect! Try Again"));
    assert!(output.contains("Cat translated in German"));
    assert!(output.contains("SESSION OVER"));

    assert_eq!(quiz.score().correct, 1);
    assert_eq!(quiz.score().misses, 1);
    assert_eq!(quiz.score().revealed, 0);
}

#[test]
fn test_session_reveal_and_change_category() {
    let dir = TempDir::new().unwrap();
    let translator = Translator::with_reference(German);
    let mut quiz =
        QuizTerminal::new(one_word_catalog(&dir), supported_languages(), translator, 7)
            .without_clearing();

    let output = play(&mut quiz, "\n25\nanimals\n:reveal\n:category\nanimals\n:quit\n");

    // The 25th offered language is german; the grid numbers from one.
    assert!(output.contains("25. German"));
    assert_eq!(output.matches("Begin!").count(), 2);
    assert_eq!(quiz.score().revealed, 1);
}

#[test]
fn test_session_rejects_unknown_choices() {
    let dir = TempDir::new().unwrap();
    let translator = Translator::with_reference(German);
    let mut quiz =
        QuizTerminal::new(one_word_catalog(&dir), supported_languages(), translator, 7)
            .without_clearing();

    let output = play(&mut quiz, "\nklingon\nenglish\n:quit\n");

    assert!(output.contains("'klingon' is not on the list"));
    assert!(output.contains("'english' is not on the list"));
    assert_eq!(quiz.score().words_seen(), 0);
}

#[test]
fn test_session_degrades_when_service_is_down() {
    let dir = TempDir::new().unwrap();
    let translator = Translator::with_reference(Offline);
    let mut quiz =
        QuizTerminal::new(one_word_catalog(&dir), supported_languages(), translator, 7)
            .without_clearing();

    let output = play(&mut quiz, "\nfrench\nanimals\n:quit\n");

    assert!(output.contains("'translation unavailable' in French"));
    assert!(output.contains("SESSION OVER"));
}

#[test]
fn test_session_ends_on_end_of_input() {
    let dir = TempDir::new().unwrap();
    let translator = Translator::with_reference(German);
    let mut quiz =
        QuizTerminal::new(one_word_catalog(&dir), supported_languages(), translator, 7)
            .without_clearing();

    let output = play(&mut quiz, "");
    assert!(output.contains("SESSION OVER"));
    assert_eq!(quiz.score().words_seen(), 0);
}

#[test]
fn test_session_needs_a_playable_category() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("empty")).unwrap();
    let catalog = Catalog::build(dir.path()).unwrap();
    let mut quiz = QuizTerminal::new(
        catalog,
        supported_languages(),
        Translator::with_reference(German),
        7,
    );

    let err = quiz
        .run_with(Cursor::new(String::new()), Vec::new())
        .unwrap_err();
    assert!(err.to_string().contains("no playable categories"));
}
