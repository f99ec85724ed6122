use crate::catalog::Catalog;
use crate::config::{QuizConfig, ASSET_DIR_ENV, ENDPOINT_ENV};
use crate::i18n::{supported_languages, LanguageTable};
use anyhow::{anyhow, Result};
use colored::*;
use std::env;
use std::path::Path;

pub fn run_self_diagnostics(config: &QuizConfig) -> Result<()> {
    println!("lingo-basics self-diagnostics");

    let checks = collect(config);

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

pub fn collect(config: &QuizConfig) -> Vec<Diagnostic> {
    let mut checks = Vec::new();
    checks.push(Diagnostic::ok(
        "version",
        format!("lingo-basics {}", env!("CARGO_PKG_VERSION")),
    ));
    checks.push(check_directory("asset directory", &config.asset_dir));
    checks.extend(check_catalog(&config.asset_dir));
    checks.push(check_languages());
    checks.push(check_endpoint(&config.endpoint));
    checks.push(check_override("asset override", ASSET_DIR_ENV));
    checks.push(check_override("endpoint override", ENDPOINT_ENV));
    checks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

#[derive(Debug)]
pub struct Diagnostic {
    pub label: &'static str,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        let tag = match self.level {
            Level::Ok => self.level.tag().green(),
            Level::Warn => self.level.tag().yellow(),
            Level::Error => self.level.tag().red(),
        };
        println!("  [{}] {:20} {}", tag, self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }
}

fn check_directory(label: &'static str, path: &Path) -> Diagnostic {
    if path.is_dir() {
        Diagnostic::ok(label, format!("{} exists", path.display()))
    } else if path.exists() {
        Diagnostic::error(
            label,
            format!("{} exists but is not a directory", path.display()),
        )
    } else {
        Diagnostic::error(
            label,
            format!(
                "{} missing (pass --assets or set {})",
                path.display(),
                ASSET_DIR_ENV
            ),
        )
    }
}

fn check_catalog(root: &Path) -> Vec<Diagnostic> {
    if !root.is_dir() {
        return Vec::new();
    }
    let catalog = match Catalog::build(root) {
        Ok(catalog) => catalog,
        Err(err) => return vec![Diagnostic::error("catalog", err.to_string())],
    };

    let mut checks = Vec::new();
    if catalog.is_empty() {
        checks.push(Diagnostic::error(
            "catalog",
            "no category directories found".to_string(),
        ));
        return checks;
    }
    checks.push(Diagnostic::ok(
        "catalog",
        format!(
            "{} categories, {} words",
            catalog.len(),
            catalog.total_words()
        ),
    ));
    for category in catalog.categories.iter().filter(|c| c.words.is_empty()) {
        checks.push(Diagnostic::warning(
            "empty category",
            format!("{} has no .jpeg files and will not be offered", category.name),
        ));
    }
    checks
}

fn check_languages() -> Diagnostic {
    let supported = supported_languages().len();
    let reference = LanguageTable::reference().len();
    if supported == 0 {
        Diagnostic::error("languages", "block-list removes every language".to_string())
    } else {
        Diagnostic::ok(
            "languages",
            format!("{} of {} offered", supported, reference),
        )
    }
}

fn check_endpoint(endpoint: &str) -> Diagnostic {
    match reqwest::Url::parse(endpoint) {
        Ok(url) if url.scheme() == "https" => Diagnostic::ok("translate endpoint", url.to_string()),
        Ok(url) => Diagnostic::warning(
            "translate endpoint",
            format!("{} is not https", url),
        ),
        Err(err) => Diagnostic::error(
            "translate endpoint",
            format!("{} is not a valid URL ({})", endpoint, err),
        ),
    }
}

fn check_override(label: &'static str, env_key: &str) -> Diagnostic {
    match env::var(env_key) {
        Ok(value) if !value.trim().is_empty() => {
            Diagnostic::ok(label, format!("{}={}", env_key, value))
        }
        _ => Diagnostic::ok(label, format!("not set ({})", env_key)),
    }
}
