//! Language model command handlers
//!
//! Handles creating, inspecting, resetting, training and deleting custom
//! language models.

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use colored::*;
use serde_json::Value;
use stt_client::LanguageModelStatusSource;
use stt_core::domain::model::{CreatedModel, CustomModel, CustomModels};
use stt_core::domain::status::ModelStatus;
use stt_core::dto::model::{CreateModel, DEFAULT_BASE_MODEL};
use stt_core::poll::StatusPoller;

use super::{cancel_on_ctrl_c, decode, print_json, request_failed};
use crate::config::Config;
use crate::display::{colorize_model_status, print_model_details, print_model_summary};

/// Language model subcommands
#[derive(Subcommand)]
pub enum LanguageCommands {
    /// Create a new custom language model
    Create {
        /// Name of the new model
        name: String,

        /// Base model to customize
        #[arg(long, default_value = DEFAULT_BASE_MODEL)]
        base_model: String,

        /// Free-form description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// List all custom language models
    List,
    /// Get details of the custom language model
    Get {
        /// Model id (defaults to LANGUAGE_ID)
        id: Option<String>,
    },
    /// Delete the custom language model
    Delete {
        /// Model id (defaults to LANGUAGE_ID)
        id: Option<String>,
    },
    /// Remove all corpora and words from the custom language model
    Reset {
        /// Model id (defaults to LANGUAGE_ID)
        id: Option<String>,
    },
    /// Train the custom language model on its corpora and words
    Train {
        /// Model id (defaults to LANGUAGE_ID)
        id: Option<String>,

        /// Wait until training finishes
        #[arg(short, long)]
        wait: bool,
    },
}

/// Handle language model commands
pub async fn handle_language_command(command: LanguageCommands, config: &Config) -> Result<()> {
    match command {
        LanguageCommands::Create {
            name,
            base_model,
            description,
        } => create_model(config, name, base_model, description).await,
        LanguageCommands::List => list_models(config).await,
        LanguageCommands::Get { id } => get_model(config, config.language_id(id.as_deref())?).await,
        LanguageCommands::Delete { id } => {
            delete_model(config, config.language_id(id.as_deref())?).await
        }
        LanguageCommands::Reset { id } => {
            reset_model(config, config.language_id(id.as_deref())?).await
        }
        LanguageCommands::Train { id, wait } => {
            train_model(config, config.language_id(id.as_deref())?, wait).await
        }
    }
}

/// Create a custom language model
async fn create_model(
    config: &Config,
    name: String,
    base_model: String,
    description: Option<String>,
) -> Result<()> {
    let client = config.client()?;
    let mut req = CreateModel::new(&name).with_base_model(base_model);
    if let Some(description) = description {
        req = req.with_description(description);
    }

    if !config.json {
        println!("Creating custom language model {}...", name.cyan());
    }
    let document: Value = client
        .create_language_model(&req)
        .await
        .context("Failed to create language model")?;

    if config.json {
        return print_json(&document);
    }

    let created: CreatedModel = decode(document)?;

    println!("{}", "✓ Language model created successfully!".green());
    println!("  ID: {}", created.customization_id.cyan());
    println!();
    println!(
        "{}",
        format!("  export LANGUAGE_ID={}", created.customization_id).dimmed()
    );

    Ok(())
}

/// List all custom language models
async fn list_models(config: &Config) -> Result<()> {
    let client = config.client()?;
    let document: Value = client
        .list_language_models()
        .await
        .context("Failed to list language models")?;

    if config.json {
        return print_json(&document);
    }

    let models: CustomModels = decode(document)?;

    if models.customizations.is_empty() {
        println!("{}", "No custom language models found.".yellow());
    } else {
        println!(
            "{}",
            format!(
                "Found {} custom language model(s):",
                models.customizations.len()
            )
            .bold()
        );
        println!();
        for model in &models.customizations {
            print_model_summary(model);
        }
    }

    Ok(())
}

/// Get and display a custom language model
async fn get_model(config: &Config, id: &str) -> Result<()> {
    let client = config.client()?;
    let document: Value = client
        .get_language_model(id)
        .await
        .map_err(|e| request_failed(e, "get", &format!("language model {}", id)))?;

    if config.json {
        return print_json(&document);
    }

    let model: CustomModel = decode(document)?;
    print_model_details(&model);
    Ok(())
}

/// Delete a custom language model
async fn delete_model(config: &Config, id: &str) -> Result<()> {
    let client = config.client()?;

    println!("Deleting custom language model {}...", id.cyan());
    client
        .delete_language_model(id)
        .await
        .map_err(|e| request_failed(e, "delete", &format!("language model {}", id)))?;

    println!("{}", "✓ Language model deleted successfully!".green());
    Ok(())
}

/// Reset a custom language model to its freshly created state
async fn reset_model(config: &Config, id: &str) -> Result<()> {
    let client = config.client()?;

    println!("Resetting custom language model {}...", id.cyan());
    client
        .reset_language_model(id)
        .await
        .map_err(|e| request_failed(e, "reset", &format!("language model {}", id)))?;

    println!("{}", "✓ Language model reset successfully!".green());
    Ok(())
}

/// Train a custom language model, optionally waiting for the result
async fn train_model(config: &Config, id: &str, wait: bool) -> Result<()> {
    let client = config.client()?;

    println!("Training custom language model {}...", id.cyan());
    client
        .train_language_model(id)
        .await
        .with_context(|| format!("Failed to start training of language model {}", id))?;
    println!("{}", "✓ Training started".green());

    if !wait {
        return Ok(());
    }

    println!("{}", "Waiting for training to finish...".dimmed());
    let poller = StatusPoller::new(
        LanguageModelStatusSource::new(client.clone()),
        config.poll_config(),
    )
    .with_cancellation(cancel_on_ctrl_c());

    let status = poller
        .wait_until(id, ModelStatus::is_training_finished)
        .await
        .context("Failed while waiting for language model training")?;

    if status == ModelStatus::Failed {
        let model: CustomModel = client.get_language_model(id).await?;
        bail!(
            "Training of language model {} failed: {}",
            id,
            model.error.unwrap_or_else(|| "no error reported".to_string())
        );
    }

    println!(
        "{} Language model is {}",
        "✓".green(),
        colorize_model_status(&status)
    );
    Ok(())
}
