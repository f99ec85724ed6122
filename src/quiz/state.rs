// SPDX-License-Identifier: PMPL-1.0-or-later

//! Screen flow of a quiz session, as a transition table.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    Start,
    LanguageSelect,
    CategorySelect,
    Playing,
    /// Terminal state; the session is over.
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Begin,
    ChooseLanguage,
    ChooseCategory,
    /// The player typed the right word.
    Correct,
    /// The player gave up on the current word.
    Reveal,
    ChangeCategory,
    ChangeLanguage,
    Quit,
}

const TRANSITIONS: &[(Screen, Action, Screen)] = &[
    (Screen::Start, Action::Begin, Screen::LanguageSelect),
    (Screen::LanguageSelect, Action::ChooseLanguage, Screen::CategorySelect),
    (Screen::CategorySelect, Action::ChooseCategory, Screen::Playing),
    (Screen::Playing, Action::Correct, Screen::Playing),
    (Screen::Playing, Action::Reveal, Screen::Playing),
    (Screen::Playing, Action::ChangeCategory, Screen::CategorySelect),
    (Screen::Playing, Action::ChangeLanguage, Screen::LanguageSelect),
];

impl Screen {
    /// Screen reached from `self` by `action`, or `None` when the action
    /// is not available here. `Quit` is accepted everywhere except `Done`.
    pub fn next(self, action: Action) -> Option<Screen> {
        if self == Screen::Done {
            return None;
        }
        if action == Action::Quit {
            return Some(Screen::Done);
        }
        TRANSITIONS
            .iter()
            .find(|(from, on, _)| *from == self && *on == action)
            .map(|(_, _, to)| *to)
    }

    pub fn is_done(self) -> bool {
        self == Screen::Done
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Start => "Start",
            Screen::LanguageSelect => "Choose a language",
            Screen::CategorySelect => "Choose a category",
            Screen::Playing => "Play",
            Screen::Done => "Done",
        }
    }
}
