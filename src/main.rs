// SPDX-License-Identifier: PMPL-1.0-or-later

//! lingo-basics: picture-word vocabulary quiz in the terminal
//!
//! Pick one of 84 languages and a word category, read the translated word
//! and type the English original.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use lingo_basics::catalog::Catalog;
use lingo_basics::config::QuizConfig;
use lingo_basics::i18n::{supported_languages, LanguageIndex};
use lingo_basics::paginate::paginate;
use lingo_basics::quiz::item::{capitalize, UNAVAILABLE};
use lingo_basics::quiz::QuizTerminal;
use lingo_basics::translate::{GoogleTranslate, Translator};
use lingo_basics::{diagnostics, logging};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lingo-basics")]
#[command(version)]
#[command(about = "A language learning game: translate everyday words")]
#[command(long_about = None)]
struct Cli {
    /// Quiz config file (.yaml, .yml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Asset directory with one sub-directory of <word>.jpeg files per category
    #[arg(short, long, global = true)]
    assets: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the quiz interactively
    Play {
        /// Languages per row on the language screen
        #[arg(long)]
        columns: Option<usize>,
    },

    /// List categories and their words
    Catalog {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the languages the quiz offers
    Languages {
        /// Languages per row
        #[arg(long)]
        columns: Option<usize>,

        /// Print JSON instead of a grid
        #[arg(long)]
        json: bool,
    },

    /// Translate one English word
    Translate {
        #[arg(value_name = "WORD")]
        word: String,

        /// Target language name, e.g. "german"
        #[arg(short, long, value_name = "LANGUAGE")]
        to: String,
    },

    /// Check the asset tree, language tables and endpoint
    Doctor,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = QuizConfig::resolve(cli.config.as_deref())?;
    if let Some(assets) = cli.assets {
        config.asset_dir = assets;
    }

    match cli.command {
        Commands::Play { columns } => {
            if let Some(columns) = columns {
                config.grid_columns = columns;
            }
            config.validate()?;

            let catalog = Catalog::build(&config.asset_dir)
                .with_context(|| format!("loading assets from {}", config.asset_dir.display()))?;
            let translator =
                Translator::new(LanguageIndex::reference(), GoogleTranslate::new(&config.endpoint)?);
            let mut quiz =
                QuizTerminal::new(catalog, supported_languages(), translator, config.grid_columns);
            quiz.run()?;
        }

        Commands::Catalog { json } => {
            let catalog = Catalog::build(&config.asset_dir)
                .with_context(|| format!("loading assets from {}", config.asset_dir.display()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                println!("{}", "CATALOG".bold().yellow());
                println!("  Root: {}", catalog.root.display());
                println!(
                    "  Categories: {}  |  Words: {}",
                    catalog.len(),
                    catalog.total_words()
                );
                println!();
                for category in &catalog.categories {
                    println!(
                        "  {:<16} {}",
                        capitalize(&category.name).bold(),
                        category.words.join(", ")
                    );
                }
            }
        }

        Commands::Languages { columns, json } => {
            let languages = supported_languages();
            if json {
                println!("{}", serde_json::to_string_pretty(&languages)?);
            } else {
                let columns = columns.unwrap_or(config.grid_columns);
                let names: Vec<String> = languages.names().into_iter().map(capitalize).collect();
                for row in paginate(&names, columns)? {
                    let line: String = row.iter().map(|name| format!("{:<24}", name)).collect();
                    println!("{}", line.trim_end());
                }
                println!();
                println!("{} languages", languages.len());
            }
        }

        Commands::Translate { word, to } => {
            let translator =
                Translator::new(LanguageIndex::reference(), GoogleTranslate::new(&config.endpoint)?);
            match translator.translate_word(&word, &to.trim().to_lowercase())? {
                Some(text) => println!("{}", text),
                None => println!("{}", UNAVAILABLE),
            }
        }

        Commands::Doctor => {
            diagnostics::run_self_diagnostics(&config)?;
        }
    }

    Ok(())
}
