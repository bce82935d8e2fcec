//! Acoustic model command handlers

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use colored::*;
use serde_json::Value;
use stt_client::AcousticModelStatusSource;
use stt_core::domain::model::{CreatedModel, CustomModel, CustomModels};
use stt_core::domain::status::ModelStatus;
use stt_core::dto::model::{CreateModel, DEFAULT_BASE_MODEL};
use stt_core::poll::StatusPoller;

use super::{cancel_on_ctrl_c, decode, print_json, request_failed};
use crate::config::Config;
use crate::display::{colorize_model_status, print_model_details, print_model_summary};

/// Acoustic model subcommands
#[derive(Subcommand)]
pub enum AcousticCommands {
    /// Create a new custom acoustic model
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
    /// List all custom acoustic models
    List,
    /// Get details of the custom acoustic model
    Get {
        /// Model id (defaults to ACOUSTIC_ID)
        id: Option<String>,
    },
    /// Delete the custom acoustic model
    Delete {
        /// Model id (defaults to ACOUSTIC_ID)
        id: Option<String>,
    },
    /// Train the custom acoustic model on its audio resources
    ///
    /// When LANGUAGE_ID is set, training uses that custom language model.
    Train {
        /// Model id (defaults to ACOUSTIC_ID)
        id: Option<String>,

        /// Wait until training finishes
        #[arg(short, long)]
        wait: bool,
    },
}

/// Handle acoustic model commands
pub async fn handle_acoustic_command(command: AcousticCommands, config: &Config) -> Result<()> {
    match command {
        AcousticCommands::Create {
            name,
            base_model,
            description,
        } => create_model(config, name, base_model, description).await,
        AcousticCommands::List => list_models(config).await,
        AcousticCommands::Get { id } => get_model(config, config.acoustic_id(id.as_deref())?).await,
        AcousticCommands::Delete { id } => {
            delete_model(config, config.acoustic_id(id.as_deref())?).await
        }
        AcousticCommands::Train { id, wait } => {
            train_model(config, config.acoustic_id(id.as_deref())?, wait).await
        }
    }
}

/// Create a custom acoustic model
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
        println!("Creating custom acoustic model {}...", name.cyan());
    }
    let document: Value = client
        .create_acoustic_model(&req)
        .await
        .context("Failed to create acoustic model")?;

    if config.json {
        return print_json(&document);
    }

    let created: CreatedModel = decode(document)?;

    println!("{}", "✓ Acoustic model created successfully!".green());
    println!("  ID: {}", created.customization_id.cyan());
    println!();
    println!(
        "{}",
        format!("  export ACOUSTIC_ID={}", created.customization_id).dimmed()
    );

    Ok(())
}

/// List all custom acoustic models
async fn list_models(config: &Config) -> Result<()> {
    let client = config.client()?;
    let document: Value = client
        .list_acoustic_models()
        .await
        .context("Failed to list acoustic models")?;

    if config.json {
        return print_json(&document);
    }

    let models: CustomModels = decode(document)?;

    if models.customizations.is_empty() {
        println!("{}", "No custom acoustic models found.".yellow());
    } else {
        println!(
            "{}",
            format!(
                "Found {} custom acoustic model(s):",
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

/// Get and display a custom acoustic model
async fn get_model(config: &Config, id: &str) -> Result<()> {
    let client = config.client()?;
    let document: Value = client
        .get_acoustic_model(id)
        .await
        .map_err(|e| request_failed(e, "get", &format!("acoustic model {}", id)))?;

    if config.json {
        return print_json(&document);
    }

    let model: CustomModel = decode(document)?;
    print_model_details(&model);
    Ok(())
}

/// Delete a custom acoustic model
async fn delete_model(config: &Config, id: &str) -> Result<()> {
    let client = config.client()?;

    println!("Deleting custom acoustic model {}...", id.cyan());
    client
        .delete_acoustic_model(id)
        .await
        .map_err(|e| request_failed(e, "delete", &format!("acoustic model {}", id)))?;

    println!("{}", "✓ Acoustic model deleted successfully!".green());
    Ok(())
}

/// Train a custom acoustic model, optionally waiting for the result
async fn train_model(config: &Config, id: &str, wait: bool) -> Result<()> {
    let client = config.client()?;
    let language_id = config.language_id.as_deref();

    match language_id {
        Some(language_id) => println!(
            "Training custom acoustic model {} with language model {}...",
            id.cyan(),
            language_id.cyan()
        ),
        None => println!("Training custom acoustic model {}...", id.cyan()),
    }
    client
        .train_acoustic_model(id, language_id)
        .await
        .with_context(|| format!("Failed to start training of acoustic model {}", id))?;
    println!("{}", "✓ Training started".green());

    if !wait {
        return Ok(());
    }

    println!("{}", "Waiting for training to finish...".dimmed());
    let poller = StatusPoller::new(
        AcousticModelStatusSource::new(client.clone()),
        config.poll_config(),
    )
    .with_cancellation(cancel_on_ctrl_c());

    let status = poller
        .wait_until(id, ModelStatus::is_training_finished)
        .await
        .context("Failed while waiting for acoustic model training")?;

    if status == ModelStatus::Failed {
        let model: CustomModel = client.get_acoustic_model(id).await?;
        bail!(
            "Training of acoustic model {} failed: {}",
            id,
            model.error.unwrap_or_else(|| "no error reported".to_string())
        );
    }

    println!(
        "{} Acoustic model is {}",
        "✓".green(),
        colorize_model_status(&status)
    );
    Ok(())
}
