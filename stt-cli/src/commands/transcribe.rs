//! Transcription command handler

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::*;
use serde_json::Value;
use std::path::{Path, PathBuf};
use stt_core::domain::audio::AudioFormat;
use stt_core::domain::recognition::RecognitionResults;
use stt_core::dto::model::DEFAULT_BASE_MODEL;
use stt_core::dto::recognize::RecognizeRequest;

use super::{decode, print_json};
use crate::config::Config;

/// Arguments of the transcribe command
#[derive(Args)]
pub struct TranscribeArgs {
    /// Audio file to transcribe (wav, flac, mp3 or ogg)
    pub file: PathBuf,

    /// Base model to recognize with
    #[arg(long, default_value = DEFAULT_BASE_MODEL)]
    pub model: String,

    /// Where to write the transcript (defaults to the audio file with a .transcript extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Transcribe an audio file using the configured custom models, if any
pub async fn handle_transcribe(args: TranscribeArgs, config: &Config) -> Result<()> {
    let format = match AudioFormat::from_path(&args.file) {
        Some(format) if !format.is_archive() => format,
        _ => bail!(
            "Unsupported audio file {}: expected wav, flac, mp3 or ogg",
            args.file.display()
        ),
    };

    let mut req = RecognizeRequest::new(format);
    req.model = args.model;
    req.language_customization_id = config.language_id.clone();
    req.acoustic_customization_id = config.acoustic_id.clone();

    if !config.json {
        print_models_used(&args.file, &req);
    }

    let audio = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("Failed to read audio file {}", args.file.display()))?;

    let client = config.client()?;
    let document: Value = client
        .recognize(&req, audio)
        .await
        .context("Failed to transcribe audio")?;
    let results: RecognitionResults = decode(document.clone())?;

    let transcript = results.transcript();
    let output = args
        .output
        .unwrap_or_else(|| transcript_path_for(&args.file));
    tokio::fs::write(&output, &transcript)
        .await
        .with_context(|| format!("Failed to write transcript {}", output.display()))?;

    if config.json {
        return print_json(&document);
    }

    if results.is_empty() {
        println!("{}", "No speech was recognized.".yellow());
    } else {
        println!("{}", "Transcription:".bold());
        println!("{}", transcript);
    }
    println!(
        "{}",
        format!("Transcript saved in {}", output.display()).dimmed()
    );

    Ok(())
}

fn print_models_used(file: &Path, req: &RecognizeRequest) {
    println!("Transcribing {} using:", file.display().to_string().cyan());
    match &req.language_customization_id {
        Some(id) => println!("  - custom language model (id: {})", id),
        None => println!("  - base language model"),
    }
    match &req.acoustic_customization_id {
        Some(id) => println!("  - custom acoustic model (id: {})", id),
        None => println!("  - base acoustic model"),
    }
}

/// Transcript file next to the audio file
fn transcript_path_for(audio: &Path) -> PathBuf {
    audio.with_extension("transcript")
}
