// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog builder
//!
//! Reads the asset tree (`<root>/<category>/<word>.jpeg`) into a
//! category -> words mapping. Categories and words keep directory-listing
//! order, which is platform-defined: use it for display only.

use crate::error::{LingoError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;
use walkdir::WalkDir;

/// Required extension of every image asset.
pub const IMAGE_EXTENSION: &str = "jpeg";

fn asset_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(.+)\.jpeg$").expect("static asset pattern"))
}

/// A single category directory and the words found in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub root: PathBuf,
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Scan `root` and build the catalog.
    ///
    /// Fails with [`LingoError::NotFound`] when the root is missing or when
    /// any entry inside a category is not a `<word>.jpeg` file. Plain files
    /// sitting directly under the root are not categories and are skipped.
    pub fn build(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(LingoError::not_found(root, "asset directory does not exist"));
        }

        let mut categories = Vec::new();
        for entry in WalkDir::new(root)
            .follow_links(true)
            .min_depth(1)
            .max_depth(1)
        {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_dir() {
                debug!(path = %entry.path().display(), "skipping non-directory at asset root");
                continue;
            }
            let name = utf8_name(entry.path())?;
            let words = scan_category(entry.path())?;
            debug!(category = %name, words = words.len(), "scanned category");
            categories.push(Category { name, words });
        }

        debug!(
            root = %root.display(),
            categories = categories.len(),
            "catalog built"
        );
        Ok(Self {
            root: root.to_path_buf(),
            categories,
        })
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn words(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.words.as_slice())
    }

    pub fn total_words(&self) -> usize {
        self.categories.iter().map(|c| c.words.len()).sum()
    }

    /// Path of the image that illustrates `word` in `category`.
    pub fn image_path(&self, category: &str, word: &str) -> PathBuf {
        self.root
            .join(category)
            .join(format!("{}.{}", word, IMAGE_EXTENSION))
    }
}

fn scan_category(dir: &Path) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
    {
        let entry = entry.map_err(std::io::Error::from)?;
        let file_name = utf8_name(entry.path())?;
        if !entry.file_type().is_file() {
            return Err(LingoError::not_found(
                entry.path(),
                "category entries must be image files",
            ));
        }
        let word = asset_pattern()
            .captures(&file_name)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| {
                LingoError::not_found(
                    entry.path(),
                    format!("expected a <word>.{} file", IMAGE_EXTENSION),
                )
            })?;
        words.push(word);
    }
    Ok(words)
}

fn utf8_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| LingoError::not_found(path, "file name is not valid UTF-8"))
}
