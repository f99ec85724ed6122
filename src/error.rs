// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error taxonomy for the quiz core.
//!
//! Filesystem and argument problems are hard errors. An unknown target
//! language is not: the translator returns `Ok(None)` for it.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LingoError {
    #[error("not found: {} ({reason})", path.display())]
    NotFound { path: PathBuf, reason: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("translation service returned {status}: {message}")]
    Service { status: u16, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected response: {0}")]
    Parse(String),
}

impl LingoError {
    pub fn not_found(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        LingoError::NotFound {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LingoError>;
