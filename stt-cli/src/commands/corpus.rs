//! Corpus command handlers
//!
//! Adding a corpus is the one long-running command: after the upload the
//! service analyzes the text, and nothing else can be added to the model
//! until that analysis finishes. The handler waits for it, then saves the
//! out-of-vocabulary words the analysis found. With `--json` the progress
//! lines are skipped and the final corpus document is printed instead.

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use colored::*;
use serde_json::Value;
use std::path::{Path, PathBuf};
use stt_client::{CorpusStatusSource, SttClient};
use stt_core::domain::corpus::{Corpora, Corpus};
use stt_core::domain::status::CorpusStatus;
use stt_core::domain::word::WordSort;
use stt_core::poll::StatusPoller;
use tracing::info;

use super::{cancel_on_ctrl_c, decode, print_json, request_failed};
use crate::config::Config;
use crate::display::colorize_corpus_status;

/// Corpus subcommands
#[derive(Subcommand)]
pub enum CorpusCommands {
    /// Upload a plain-text corpus and wait for its analysis
    Add {
        /// Corpus file to upload
        file: PathBuf,

        /// Corpus name (defaults to the file name)
        #[arg(short, long)]
        name: Option<String>,

        /// Return right after the upload instead of waiting for analysis
        #[arg(long)]
        no_wait: bool,

        /// Replace an existing corpus of the same name
        #[arg(long)]
        overwrite: bool,

        /// Where to save the out-of-vocabulary words (defaults to <LANGUAGE_ID>.OOVs.corpus)
        #[arg(long)]
        words_out: Option<PathBuf>,
    },
    /// List the corpora of the custom language model
    List,
    /// Get details of a corpus
    Get {
        /// Corpus name
        name: String,
    },
    /// Delete a corpus
    Delete {
        /// Corpus name
        name: String,
    },
}

/// Handle corpus commands
pub async fn handle_corpus_command(command: CorpusCommands, config: &Config) -> Result<()> {
    let language_id = config.language_id(None)?;
    let client = config.client()?;

    match command {
        CorpusCommands::Add {
            file,
            name,
            no_wait,
            overwrite,
            words_out,
        } => {
            let upload = Upload {
                file,
                name,
                no_wait,
                overwrite,
                words_out,
            };
            add_corpus(&client, config, language_id, upload).await
        }
        CorpusCommands::List => list_corpora(&client, config, language_id).await,
        CorpusCommands::Get { name } => get_corpus(&client, config, language_id, &name).await,
        CorpusCommands::Delete { name } => delete_corpus(&client, language_id, &name).await,
    }
}

/// Corpus name derived from the uploaded file
fn corpus_name_for(file: &Path) -> Result<String> {
    file.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .with_context(|| format!("Cannot derive a corpus name from {}", file.display()))
}

/// Default file the out-of-vocabulary words are saved to
fn default_words_path(language_id: &str) -> PathBuf {
    PathBuf::from(format!("{}.OOVs.corpus", language_id))
}

/// Options of `corpus add`
struct Upload {
    file: PathBuf,
    name: Option<String>,
    no_wait: bool,
    overwrite: bool,
    words_out: Option<PathBuf>,
}

/// Upload a corpus, wait for its analysis and save the extracted words
async fn add_corpus(
    client: &SttClient,
    config: &Config,
    language_id: &str,
    upload: Upload,
) -> Result<()> {
    let name = match upload.name {
        Some(name) => name,
        None => corpus_name_for(&upload.file)?,
    };
    let text = tokio::fs::read(&upload.file)
        .await
        .with_context(|| format!("Failed to read corpus file {}", upload.file.display()))?;

    if !config.json {
        println!("Adding corpus {} ({} bytes)...", name.cyan(), text.len());
    }
    client
        .add_corpus(language_id, &name, text, upload.overwrite)
        .await
        .context("Failed to add corpus file")?;

    if upload.no_wait {
        if config.json {
            let document: Value = client
                .get_corpus(language_id, &name)
                .await
                .context("Failed to get uploaded corpus")?;
            return print_json(&document);
        }
        println!("{}", "✓ Corpus uploaded".green());
        return Ok(());
    }

    if !config.json {
        println!("{}", "✓ Corpus uploaded".green());
        println!("{}", "Checking status of corpus analysis...".dimmed());
    }
    let poller = StatusPoller::new(
        CorpusStatusSource::new(client.clone(), language_id),
        config.poll_config(),
    )
    .with_cancellation(cancel_on_ctrl_c());

    let status = poller
        .wait_until(&name, CorpusStatus::is_terminal)
        .await
        .context("Failed while waiting for corpus analysis")?;

    let document: Value = client
        .get_corpus(language_id, &name)
        .await
        .context("Failed to get analyzed corpus")?;
    let corpus: Corpus = decode(document.clone())?;

    if status == CorpusStatus::Undetermined {
        bail!(
            "Analysis of corpus {} ended as undetermined: {}",
            name,
            corpus.error.unwrap_or_else(|| "no error reported".to_string())
        );
    }

    let words_path = upload
        .words_out
        .unwrap_or_else(|| default_words_path(language_id));
    let words = client
        .list_words_raw(language_id, WordSort::Count)
        .await
        .context("Failed to list words")?;
    tokio::fs::write(&words_path, words)
        .await
        .with_context(|| format!("Failed to write {}", words_path.display()))?;
    info!(path = %words_path.display(), "saved word list");

    if config.json {
        return print_json(&document);
    }

    println!("{}", "✓ Corpus analysis done!".green());
    println!("  Total words:       {}", corpus.total_words);
    println!("  Out of vocabulary: {}", corpus.out_of_vocabulary_words);
    println!(
        "  Words list saved in {}",
        words_path.display().to_string().cyan()
    );

    Ok(())
}

/// List the corpora of a language model
async fn list_corpora(client: &SttClient, config: &Config, language_id: &str) -> Result<()> {
    let document: Value = client
        .list_corpora(language_id)
        .await
        .context("Failed to get corpora")?;

    if config.json {
        return print_json(&document);
    }

    let corpora: Corpora = decode(document)?;
    if corpora.corpora.is_empty() {
        println!("{}", "No corpora found.".yellow());
    } else {
        println!(
            "{}",
            format!("Found {} corpus file(s):", corpora.corpora.len()).bold()
        );
        println!();
        for corpus in &corpora.corpora {
            print_corpus_summary(corpus);
        }
    }

    Ok(())
}

/// Get and display a single corpus
async fn get_corpus(
    client: &SttClient,
    config: &Config,
    language_id: &str,
    name: &str,
) -> Result<()> {
    let document: Value = client
        .get_corpus(language_id, name)
        .await
        .map_err(|e| request_failed(e, "get", &format!("corpus {}", name)))?;

    if config.json {
        return print_json(&document);
    }

    print_corpus_summary(&decode(document)?);
    Ok(())
}

/// Delete a corpus
async fn delete_corpus(client: &SttClient, language_id: &str, name: &str) -> Result<()> {
    println!("Deleting corpus {}...", name.cyan());
    client
        .delete_corpus(language_id, name)
        .await
        .map_err(|e| request_failed(e, "delete", &format!("corpus {}", name)))?;

    println!("{}", "✓ Corpus deleted successfully!".green());
    Ok(())
}

fn print_corpus_summary(corpus: &Corpus) {
    println!("  {} {}", "▸".cyan(), corpus.name.bold());
    println!("    Status:            {}", colorize_corpus_status(&corpus.status));
    println!("    Total words:       {}", corpus.total_words);
    println!("    Out of vocabulary: {}", corpus.out_of_vocabulary_words);
    if let Some(error) = &corpus.error {
        println!("    Error:             {}", error.red());
    }
    println!();
}
