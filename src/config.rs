// SPDX-License-Identifier: PMPL-1.0-or-later

//! Quiz configuration loading.

use crate::translate::DEFAULT_ENDPOINT;
use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const ASSET_DIR_ENV: &str = "LINGO_ASSET_DIR";
pub const ENDPOINT_ENV: &str = "LINGO_TRANSLATE_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Root of the `<category>/<word>.jpeg` tree.
    pub asset_dir: PathBuf,
    /// Languages per row on the language selection screen.
    pub grid_columns: usize,
    pub endpoint: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
            grid_columns: 7,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl QuizConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading quiz config {}", path.display()))?;
        let config: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json quiz config {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml quiz config {}", path.display()))?,
            _ => {
                return Err(anyhow!(
                    "unsupported quiz config extension for {}",
                    path.display()
                ))
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Config file if given, else defaults, then environment overrides.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(dir) = env::var(ASSET_DIR_ENV) {
            if !dir.trim().is_empty() {
                self.asset_dir = PathBuf::from(dir);
            }
        }
        if let Ok(endpoint) = env::var(ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                self.endpoint = endpoint;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_columns == 0 {
            bail!("grid_columns must be at least 1");
        }
        if self.endpoint.trim().is_empty() {
            bail!("endpoint must not be empty");
        }
        Ok(())
    }
}
