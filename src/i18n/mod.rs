// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language tables for the quiz.
//!
//! ## Layout
//!
//! | Item                  | What it is                                      |
//! |-----------------------|-------------------------------------------------|
//! | `REFERENCE_LANGUAGES` | every code the translation service knows (107)  |
//! | `UNSUPPORTED_CODES`   | codes never offered to the player (23)          |
//! | `supported_languages` | reference minus unsupported (84)                |
//! | `LanguageIndex`       | code -> name and name -> code lookups           |
//!
//! The tables are static data compiled into the binary. Build a
//! [`LanguageIndex`] once at startup and pass it to the translator instead
//! of scanning the table on every lookup.

mod index;
mod reference;
mod table;

pub use index::LanguageIndex;
pub use reference::{REFERENCE_LANGUAGES, UNSUPPORTED_CODES};
pub use table::{filter_languages, supported_languages, Language, LanguageTable};
