// SPDX-License-Identifier: PMPL-1.0-or-later

//! Quiz session
//!
//! Screens move Start -> language -> category -> play, driven by the
//! transition table in [`state`]. A [`QuizItem`] holds the word on screen;
//! [`QuizTerminal`] is the interactive front end.

pub mod item;
pub mod score;
pub mod state;
pub mod terminal;

pub use item::QuizItem;
pub use score::Scoreboard;
pub use state::{Action, Screen};
pub use terminal::QuizTerminal;
