//! Word command handlers

use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use colored::*;
use serde_json::Value;
use stt_core::domain::word::{WordSort, Words};
use stt_core::dto::word::AddWord;

use super::{decode, print_json, request_failed};
use crate::config::Config;

/// Word list order
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    /// Most frequent first
    Count,
    Alphabetical,
}

impl From<SortArg> for WordSort {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Count => WordSort::Count,
            SortArg::Alphabetical => WordSort::Alphabetical,
        }
    }
}

/// Word subcommands
#[derive(Subcommand)]
pub enum WordsCommands {
    /// List the words of the custom language model
    List {
        #[arg(long, value_enum, default_value = "count")]
        sort: SortArg,
    },
    /// Add or replace a custom word
    Add {
        /// The word as it appears in transcripts
        word: String,

        /// Pronunciation hints, spelled the way the word sounds (repeatable)
        #[arg(short, long)]
        sounds_like: Vec<String>,

        /// Spelling to use in transcripts instead of the word itself
        #[arg(short, long)]
        display_as: Option<String>,
    },
    /// Delete a custom word
    Delete {
        word: String,
    },
}

/// Handle word commands
pub async fn handle_words_command(command: WordsCommands, config: &Config) -> Result<()> {
    let language_id = config.language_id(None)?;
    let client = config.client()?;

    match command {
        WordsCommands::List { sort } => {
            let document: Value = client
                .list_words(language_id, sort.into())
                .await
                .context("Failed to list words")?;

            if config.json {
                return print_json(&document);
            }

            let words: Words = decode(document)?;

            if words.words.is_empty() {
                println!("{}", "No words found.".yellow());
                return Ok(());
            }

            println!("{}", format!("Found {} word(s):", words.words.len()).bold());
            println!();
            for word in &words.words {
                let display = word
                    .display_as
                    .as_deref()
                    .filter(|display| *display != word.word)
                    .map(|display| format!(" (displayed as {})", display))
                    .unwrap_or_default();
                println!(
                    "  {:>6}  {}{}  {}",
                    word.count,
                    word.word.bold(),
                    display,
                    word.sounds_like.join(", ").dimmed()
                );
            }
            Ok(())
        }
        WordsCommands::Add {
            word,
            sounds_like,
            display_as,
        } => {
            let req = AddWord {
                sounds_like,
                display_as,
            };
            client
                .add_word(language_id, &word, &req)
                .await
                .with_context(|| format!("Failed to add word {}", word))?;

            println!("{} Added word {}", "✓".green(), word.cyan());
            Ok(())
        }
        WordsCommands::Delete { word } => {
            client
                .delete_word(language_id, &word)
                .await
                .map_err(|e| request_failed(e, "delete", &format!("word {}", word)))?;

            println!("{} Deleted word {}", "✓".green(), word.cyan());
            Ok(())
        }
    }
}
