//! Audio resource command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use serde_json::Value;
use std::path::{Path, PathBuf};
use stt_client::SttClient;
use stt_core::domain::audio::{AudioFormat, AudioResource, AudioResources};

use super::{decode, print_json, request_failed};
use crate::config::Config;
use crate::display::colorize_audio_status;

/// Audio subcommands
#[derive(Subcommand)]
pub enum AudioCommands {
    /// Add an audio file or archive (zip, tar.gz) of audio files
    Add {
        /// Audio file or archive to upload
        file: PathBuf,

        /// Audio resource name (defaults to the file name)
        #[arg(short, long)]
        name: Option<String>,

        /// Replace an existing audio resource of the same name
        #[arg(long)]
        overwrite: bool,
    },
    /// List the audio resources of the custom acoustic model
    List,
    /// Delete an audio resource
    Delete {
        /// Audio resource name
        name: String,
    },
}

/// Handle audio commands
pub async fn handle_audio_command(command: AudioCommands, config: &Config) -> Result<()> {
    let acoustic_id = config.acoustic_id(None)?;
    let client = config.client()?;

    match command {
        AudioCommands::Add {
            file,
            name,
            overwrite,
        } => add_audio(&client, acoustic_id, &file, name, overwrite).await,
        AudioCommands::List => list_audio(&client, config, acoustic_id).await,
        AudioCommands::Delete { name } => delete_audio(&client, acoustic_id, &name).await,
    }
}

/// Upload an audio resource
async fn add_audio(
    client: &SttClient,
    acoustic_id: &str,
    file: &Path,
    name: Option<String>,
    overwrite: bool,
) -> Result<()> {
    let format = AudioFormat::from_path(file).with_context(|| {
        format!(
            "Unsupported audio file {}: expected zip, tar.gz, wav, flac, mp3 or ogg",
            file.display()
        )
    })?;
    let name = match name {
        Some(name) => name,
        None => file
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .with_context(|| format!("Cannot derive an audio name from {}", file.display()))?,
    };
    let data = tokio::fs::read(file)
        .await
        .with_context(|| format!("Failed to read audio file {}", file.display()))?;

    println!(
        "Adding audio source {} ({}, {} bytes)...",
        name.cyan(),
        format.content_type(),
        data.len()
    );
    client
        .add_audio(acoustic_id, &name, format, data, overwrite)
        .await
        .context("Failed to add audio source")?;

    println!("{}", "✓ Audio source added".green());
    Ok(())
}

/// List the audio resources of an acoustic model
async fn list_audio(client: &SttClient, config: &Config, acoustic_id: &str) -> Result<()> {
    let document: Value = client
        .list_audio(acoustic_id)
        .await
        .context("Failed to get audio sources")?;

    if config.json {
        return print_json(&document);
    }

    let resources: AudioResources = decode(document)?;

    if resources.audio.is_empty() {
        println!("{}", "No audio sources found.".yellow());
    } else {
        println!(
            "{}",
            format!(
                "Found {} audio source(s), {:.2} minutes in total:",
                resources.audio.len(),
                resources.total_minutes_of_audio
            )
            .bold()
        );
        println!();
        for audio in &resources.audio {
            print_audio_summary(audio);
        }
    }

    Ok(())
}

/// Delete an audio resource
async fn delete_audio(client: &SttClient, acoustic_id: &str, name: &str) -> Result<()> {
    println!("Deleting audio source {}...", name.cyan());
    client
        .delete_audio(acoustic_id, name)
        .await
        .map_err(|e| request_failed(e, "delete", &format!("audio source {}", name)))?;

    println!("{}", "✓ Audio source deleted successfully!".green());
    Ok(())
}

fn print_audio_summary(audio: &AudioResource) {
    println!("  {} {}", "▸".cyan(), audio.name.bold());
    println!("    Status:   {}", colorize_audio_status(&audio.status));
    println!("    Duration: {}s", audio.duration);
    if let Some(details) = &audio.details {
        if let Some(kind) = &details.kind {
            println!("    Type:     {}", kind);
        }
        if let Some(codec) = &details.codec {
            println!("    Codec:    {}", codec.dimmed());
        }
    }
    println!();
}
