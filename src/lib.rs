// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lingo Basics — a picture-word vocabulary quiz.
//!
//! The player picks a language and a category, sees an everyday word
//! translated out of English, and types the English word back.
//!
//! BUILDING BLOCKS:
//! 1. **Catalog**: words per category, read from `<assets>/<category>/<word>.jpeg`.
//! 2. **i18n**: the translation service's language table, the block-list
//!    filter and a two-way name/code index.
//! 3. **Paginate**: fixed-size rows for grid layouts.
//! 4. **Translate**: name -> code resolution in front of an HTTP translation
//!    service.
//! 5. **Quiz**: screen state machine and the terminal front end.

pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod paginate;
pub mod quiz;
pub mod translate;

pub use catalog::Catalog;
pub use error::{LingoError, Result};
