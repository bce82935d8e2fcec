//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod acoustic;
mod audio;
mod corpus;
mod language;
mod models;
mod transcribe;
mod words;

pub use acoustic::AcousticCommands;
pub use audio::AudioCommands;
pub use corpus::CorpusCommands;
pub use language::LanguageCommands;
pub use models::ModelsCommands;
pub use transcribe::TranscribeArgs;
pub use words::WordsCommands;

use anyhow::{Context, Result, anyhow};
use clap::Subcommand;
use serde::de::DeserializeOwned;
use serde_json::Value;
use stt_client::ClientError;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Base models offered by the service
    Models {
        #[command(subcommand)]
        command: ModelsCommands,
    },
    /// Custom language models
    Language {
        #[command(subcommand)]
        command: LanguageCommands,
    },
    /// Corpora of the custom language model
    Corpus {
        #[command(subcommand)]
        command: CorpusCommands,
    },
    /// Words of the custom language model
    Words {
        #[command(subcommand)]
        command: WordsCommands,
    },
    /// Custom acoustic models
    Acoustic {
        #[command(subcommand)]
        command: AcousticCommands,
    },
    /// Audio resources of the custom acoustic model
    Audio {
        #[command(subcommand)]
        command: AudioCommands,
    },
    /// Transcribe an audio file with the configured custom models
    Transcribe(TranscribeArgs),
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Models { command } => models::handle_models_command(command, config).await,
        Commands::Language { command } => {
            language::handle_language_command(command, config).await
        }
        Commands::Corpus { command } => corpus::handle_corpus_command(command, config).await,
        Commands::Words { command } => words::handle_words_command(command, config).await,
        Commands::Acoustic { command } => {
            acoustic::handle_acoustic_command(command, config).await
        }
        Commands::Audio { command } => audio::handle_audio_command(command, config).await,
        Commands::Transcribe(args) => transcribe::handle_transcribe(args, config).await,
    }
}

/// Print a service document as pretty JSON, exactly as it was received
fn print_json(document: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(document)?);
    Ok(())
}

/// Decode a service document for formatted output
fn decode<T: DeserializeOwned>(document: Value) -> Result<T> {
    serde_json::from_value(document).context("Unexpected response document")
}

/// Error for a failed request on a named resource
///
/// A 404 is reported as a missing resource rather than with the raw body.
fn request_failed(err: ClientError, action: &str, resource: &str) -> anyhow::Error {
    if err.is_not_found() {
        anyhow!("{} not found", resource)
    } else {
        anyhow::Error::new(err).context(format!("Failed to {} {}", action, resource))
    }
}

/// Token cancelled when the user presses Ctrl-C
///
/// Lets a long wait on the service end with a clean error instead of a
/// killed process.
fn cancel_on_ctrl_c() -> CancellationToken {
    let cancel = CancellationToken::new();
    let token = cancel.clone();

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => token.cancel(),
            Err(e) => warn!("Failed to listen for Ctrl-C: {}", e),
        }
    });

    cancel
}
