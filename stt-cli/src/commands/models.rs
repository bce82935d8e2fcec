//! Base model command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use serde_json::Value;
use stt_core::domain::model::{BaseModel, BaseModels};

use super::{decode, print_json};
use crate::config::Config;

/// Base model subcommands
#[derive(Subcommand)]
pub enum ModelsCommands {
    /// List the base models offered by the service
    List,
}

/// Handle base model commands
pub async fn handle_models_command(command: ModelsCommands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        ModelsCommands::List => {
            let document: Value = client
                .list_base_models()
                .await
                .context("Failed to list base models")?;

            if config.json {
                return print_json(&document);
            }

            let models: BaseModels = decode(document)?;

            if models.models.is_empty() {
                println!("{}", "No base models found.".yellow());
            } else {
                println!(
                    "{}",
                    format!("Found {} base model(s):", models.models.len()).bold()
                );
                println!();
                for model in &models.models {
                    print_base_model(model);
                }
            }

            Ok(())
        }
    }
}

fn print_base_model(model: &BaseModel) {
    println!("  {} {}", "▸".cyan(), model.name.bold());
    if let Some(language) = &model.language {
        println!("    Language: {}", language);
    }
    if let Some(rate) = model.rate {
        println!("    Rate:     {} Hz", rate);
    }

    let features = &model.supported_features;
    let mut customizable = Vec::new();
    if features.custom_language_model {
        customizable.push("language");
    }
    if features.custom_acoustic_model {
        customizable.push("acoustic");
    }
    if !customizable.is_empty() {
        println!("    Custom:   {}", customizable.join(", ").green());
    }
    println!();
}
