//! sttctl
//!
//! Command-line interface for customizing a cloud speech-to-text service:
//! custom language models with their corpora and words, custom acoustic
//! models with their audio, and transcription with the result.
//!
//! Connection settings come from flags or the environment (`USERNAME`,
//! `PASSWORD`, `STT_ENDPOINT`, `LANGUAGE_ID`, `ACOUSTIC_ID`). Every command
//! exits 0 on success and non-zero when the service answers with an
//! unexpected status.

mod commands;
mod config;
mod display;

use clap::Parser;
use colored::*;
use commands::{Commands, handle_command};
use config::{Config, GlobalArgs};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sttctl")]
#[command(about = "Speech-to-text customization CLI", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sttctl=info,stt_core=info,stt_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match Config::from_args(cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    match handle_command(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use commands::{AudioCommands, CorpusCommands, LanguageCommands};
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_corpus_add() {
        let cli = Cli::try_parse_from([
            "sttctl",
            "corpus",
            "add",
            "dictation_fixed.txt",
            "--name",
            "dictation-1",
        ])
        .unwrap();

        match cli.command {
            Commands::Corpus {
                command:
                    CorpusCommands::Add {
                        file,
                        name,
                        no_wait,
                        overwrite,
                        ..
                    },
            } => {
                assert_eq!(file, PathBuf::from("dictation_fixed.txt"));
                assert_eq!(name.as_deref(), Some("dictation-1"));
                assert!(!no_wait);
                assert!(!overwrite);
            }
            _ => panic!("expected corpus add"),
        }
    }

    #[test]
    fn test_parse_overwrite_flags() {
        let cli =
            Cli::try_parse_from(["sttctl", "corpus", "add", "corpus1.txt", "--overwrite"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Corpus {
                command: CorpusCommands::Add {
                    overwrite: true,
                    ..
                }
            }
        ));

        let cli =
            Cli::try_parse_from(["sttctl", "audio", "add", "calls.zip", "--overwrite"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Audio {
                command: AudioCommands::Add {
                    overwrite: true,
                    ..
                }
            }
        ));
    }

    #[test]
    fn test_missing_positional_is_a_usage_error() {
        let result = Cli::try_parse_from(["sttctl", "corpus", "add"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from(["sttctl", "language", "create"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_language_train_wait() {
        let cli = Cli::try_parse_from(["sttctl", "language", "train", "--wait"]).unwrap();
        match cli.command {
            Commands::Language {
                command: LanguageCommands::Train { id, wait },
            } => {
                assert!(id.is_none());
                assert!(wait);
            }
            _ => panic!("expected language train"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sttctl",
            "models",
            "list",
            "--json",
            "--poll-interval",
            "3",
        ])
        .unwrap();
        assert!(cli.global.json);
        assert_eq!(cli.global.poll_interval, 3);
    }
}
