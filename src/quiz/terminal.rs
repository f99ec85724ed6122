// SPDX-License-Identifier: PMPL-1.0-or-later

//! Line-based terminal front end for a quiz session

use super::item::{capitalize, normalize_answer, QuizItem, UNAVAILABLE};
use super::score::Scoreboard;
use super::state::{Action, Screen};
use crate::catalog::Catalog;
use crate::i18n::LanguageTable;
use crate::paginate::paginate;
use crate::translate::{TranslationService, Translator};
use anyhow::{bail, Result};
use colored::*;
use crossterm::{
    cursor, execute,
    terminal::{self, ClearType},
};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

const CATEGORY_HEADING: &str = "Choose a category";
const CELL_WIDTH: usize = 24;

pub struct QuizTerminal<S> {
    catalog: Catalog,
    languages: LanguageTable,
    translator: Translator<S>,
    grid_columns: usize,
    clear_screen: bool,
    language: Option<String>,
    item: Option<QuizItem>,
    score: Scoreboard,
}

enum Input {
    Line(String),
    Command(String),
    Eof,
}

impl<S: TranslationService> QuizTerminal<S> {
    pub fn new(
        catalog: Catalog,
        languages: LanguageTable,
        translator: Translator<S>,
        grid_columns: usize,
    ) -> Self {
        Self {
            catalog,
            languages,
            translator,
            grid_columns,
            clear_screen: true,
            language: None,
            item: None,
            score: Scoreboard::new(),
        }
    }

    /// Keep previous output on screen between views.
    pub fn without_clearing(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    pub fn score(&self) -> &Scoreboard {
        &self.score
    }

    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        self.run_with(stdin.lock(), io::stdout())
    }

    /// Drive the session from `input` until the player quits or input ends.
    pub fn run_with(&mut self, mut input: impl BufRead, mut out: impl Write) -> Result<()> {
        if self.playable_categories().is_empty() {
            bail!(
                "no playable categories under {}",
                self.catalog.root.display()
            );
        }

        let mut screen = Screen::Start;
        while !screen.is_done() {
            let action = match screen {
                Screen::Start => self.start(&mut input, &mut out)?,
                Screen::LanguageSelect => self.select_language(&mut input, &mut out)?,
                Screen::CategorySelect => self.select_category(&mut input, &mut out)?,
                Screen::Playing => self.play_round(&mut input, &mut out)?,
                Screen::Done => break,
            };
            match screen.next(action) {
                Some(next) => {
                    debug!(from = ?screen, ?action, to = ?next, "screen transition");
                    screen = next;
                }
                None => warn!(?screen, ?action, "ignored unavailable action"),
            }
        }

        writeln!(out)?;
        writeln!(out, "{}", "SESSION OVER".bold().cyan())?;
        writeln!(out, "  {}", self.score.summary())?;
        out.flush()?;
        Ok(())
    }

    fn start(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<Action> {
        self.clear(out)?;
        writeln!(out, "{}", "LINGO BASICS".bold().cyan())?;
        writeln!(out, "A Language Learning Game")?;
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            "Press Enter to start. Type :quit at any prompt to leave.".dimmed()
        )?;
        Ok(match read_input(input, out)? {
            Input::Eof => Action::Quit,
            Input::Command(cmd) if cmd == "quit" => Action::Quit,
            _ => Action::Begin,
        })
    }

    fn select_language(
        &mut self,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> Result<Action> {
        self.clear(out)?;
        writeln!(out, "{}", Screen::LanguageSelect.title().bold().yellow())?;
        writeln!(out)?;

        let names: Vec<String> = self
            .languages
            .names()
            .iter()
            .enumerate()
            .map(|(i, name)| format!("{:>3}. {}", i + 1, capitalize(name)))
            .collect();
        for row in paginate(&names, self.grid_columns)? {
            let line: String = row
                .iter()
                .map(|cell| format!("{:<width$}", cell, width = CELL_WIDTH))
                .collect();
            writeln!(out, "{}", line.trim_end())?;
        }

        loop {
            match read_input(input, out)? {
                Input::Eof => return Ok(Action::Quit),
                Input::Command(cmd) if cmd == "quit" => return Ok(Action::Quit),
                Input::Command(cmd) => writeln!(out, "Unknown command :{}", cmd)?,
                Input::Line(line) => {
                    let names = self.languages.names();
                    match resolve_choice(&line, &names) {
                        Some(name) => {
                            self.language = Some(name);
                            return Ok(Action::ChooseLanguage);
                        }
                        None => writeln!(out, "'{}' is not on the list", line.trim())?,
                    }
                }
            }
        }
    }

    fn select_category(
        &mut self,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> Result<Action> {
        let Some(language) = self.language.clone() else {
            bail!("category selection reached without a language");
        };

        self.clear(out)?;
        writeln!(out, "{}", CATEGORY_HEADING.bold().yellow())?;
        writeln!(out, "{}", self.translate_or_unavailable(CATEGORY_HEADING, &language))?;
        writeln!(out)?;

        let categories = self.playable_categories();
        for (i, name) in categories.iter().enumerate() {
            writeln!(out, "{:>3}. {}", i + 1, capitalize(name))?;
        }

        loop {
            match read_input(input, out)? {
                Input::Eof => return Ok(Action::Quit),
                Input::Command(cmd) if cmd == "quit" => return Ok(Action::Quit),
                Input::Command(cmd) => writeln!(out, "Unknown command :{}", cmd)?,
                Input::Line(line) => {
                    let names: Vec<&str> = categories.iter().map(String::as_str).collect();
                    match resolve_choice(&line, &names) {
                        Some(category) => {
                            self.item = Some(QuizItem::new(language.clone(), category));
                            return Ok(Action::ChooseCategory);
                        }
                        None => writeln!(out, "'{}' is not a category", line.trim())?,
                    }
                }
            }
        }
    }

    fn play_round(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<Action> {
        let Some(mut item) = self.item.take() else {
            bail!("play started without a category");
        };
        // Recap of the previous word comes before the next one is drawn.
        let recap = item.message.clone();
        item.next_word(&self.catalog, &self.translator)?;

        self.clear(out)?;
        writeln!(out, "{}", recap.bold())?;
        writeln!(out)?;
        if let Some(image) = &item.image {
            writeln!(out, "{} {}", "Picture:".dimmed(), image.display())?;
        }
        writeln!(out, "{}", item.question())?;
        writeln!(
            out,
            "{}",
            ":reveal  :category  :language  :quit".dimmed()
        )?;

        let action = loop {
            match read_input(input, out)? {
                Input::Eof => break Action::Quit,
                Input::Command(cmd) => match cmd.as_str() {
                    "quit" => break Action::Quit,
                    "reveal" => {
                        self.score.record_reveal();
                        break Action::Reveal;
                    }
                    "category" => break Action::ChangeCategory,
                    "language" => break Action::ChangeLanguage,
                    other => writeln!(out, "Unknown command :{}", other)?,
                },
                Input::Line(answer) => {
                    if item.check(&answer) {
                        self.score.record_correct();
                        break Action::Correct;
                    }
                    self.score.record_miss();
                    writeln!(out, "{}", item.retry_prompt(&answer).red())?;
                }
            }
        };

        self.item = Some(item);
        Ok(action)
    }

    fn playable_categories(&self) -> Vec<String> {
        self.catalog
            .categories
            .iter()
            .filter(|c| !c.words.is_empty())
            .map(|c| c.name.clone())
            .collect()
    }

    fn translate_or_unavailable(&self, text: &str, language: &str) -> String {
        match self.translator.translate_word(text, language) {
            Ok(Some(translated)) => translated,
            Ok(None) => UNAVAILABLE.to_string(),
            Err(err) => {
                warn!(error = %err, "heading translation failed");
                UNAVAILABLE.to_string()
            }
        }
    }

    fn clear(&self, out: &mut impl Write) -> Result<()> {
        if self.clear_screen {
            execute!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        } else {
            writeln!(out)?;
        }
        Ok(())
    }
}

fn read_input(input: &mut impl BufRead, out: &mut impl Write) -> Result<Input> {
    write!(out, "{} ", ">".green())?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Input::Eof);
    }
    let trimmed = line.trim();
    Ok(match trimmed.strip_prefix(':') {
        Some(cmd) => Input::Command(cmd.trim().to_lowercase()),
        None => Input::Line(trimmed.to_string()),
    })
}

/// Match typed input against a menu: a 1-based number or the entry
/// itself, case-insensitively.
fn resolve_choice<T: AsRef<str>>(typed: &str, options: &[T]) -> Option<String> {
    let typed = normalize_answer(typed);
    if typed.is_empty() {
        return None;
    }
    if let Ok(n) = typed.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| options.get(i))
            .map(|o| o.as_ref().to_string());
    }
    options
        .iter()
        .map(AsRef::as_ref)
        .find(|option| option.to_lowercase() == typed)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_by_number_or_name() {
        let options = ["german", "spanish", "haitian creole"];
        assert_eq!(resolve_choice("2", &options).as_deref(), Some("spanish"));
        assert_eq!(resolve_choice(" German ", &options).as_deref(), Some("german"));
        assert_eq!(
            resolve_choice("Haitian Creole", &options).as_deref(),
            Some("haitian creole")
        );
    }

    #[test]
    fn resolve_rejects_out_of_range_and_unknown() {
        let options = ["german"];
        assert_eq!(resolve_choice("0", &options), None);
        assert_eq!(resolve_choice("2", &options), None);
        assert_eq!(resolve_choice("klingon", &options), None);
        assert_eq!(resolve_choice("   ", &options), None);
    }
}
