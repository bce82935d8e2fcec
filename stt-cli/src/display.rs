//! Shared terminal output helpers

use colored::*;
use stt_core::domain::model::CustomModel;
use stt_core::domain::status::{AudioStatus, CorpusStatus, ModelStatus};

/// Print a custom model summary line block
pub fn print_model_summary(model: &CustomModel) {
    println!(
        "  {} {} {}",
        "▸".cyan(),
        model.name.bold(),
        model.customization_id.dimmed()
    );
    println!("    Base model: {}", model.base_model_name);
    println!("    Status:     {}", colorize_model_status(&model.status));
    if let Some(created) = model.created {
        println!(
            "    Created:    {}",
            created.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
        );
    }
    println!();
}

/// Print detailed custom model information
pub fn print_model_details(model: &CustomModel) {
    println!("{}", "Model Details:".bold());
    println!("  ID:          {}", model.customization_id.cyan());
    println!("  Name:        {}", model.name);
    if let Some(description) = &model.description {
        println!("  Description: {}", description.dimmed());
    }
    println!("  Base model:  {}", model.base_model_name);
    if let Some(language) = &model.language {
        println!("  Language:    {}", language);
    }
    if let Some(dialect) = &model.dialect {
        println!("  Dialect:     {}", dialect);
    }
    println!("  Status:      {}", colorize_model_status(&model.status));
    if model.status == ModelStatus::Training {
        println!("  Progress:    {}%", model.progress);
    }
    if let Some(created) = model.created {
        println!("  Created:     {}", created.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(warnings) = &model.warnings {
        println!("\n{}", "Warnings:".bold());
        println!("{}", warnings.yellow());
    }
    if let Some(error) = &model.error {
        println!("\n{}", "Error:".bold());
        println!("{}", error.red());
    }
}

/// Colorize a model status for display
pub fn colorize_model_status(status: &ModelStatus) -> ColoredString {
    let status_str = status.as_str();
    match status {
        ModelStatus::Pending => status_str.dimmed(),
        ModelStatus::Ready => status_str.yellow(),
        ModelStatus::Training | ModelStatus::Upgrading => status_str.cyan(),
        ModelStatus::Available => status_str.green(),
        ModelStatus::Failed => status_str.red(),
        ModelStatus::Unknown(_) => status_str.magenta(),
    }
}

/// Colorize a corpus status for display
pub fn colorize_corpus_status(status: &CorpusStatus) -> ColoredString {
    let status_str = status.as_str();
    match status {
        CorpusStatus::Analyzed => status_str.green(),
        CorpusStatus::BeingProcessed => status_str.cyan(),
        CorpusStatus::Undetermined => status_str.red(),
        CorpusStatus::Unknown(_) => status_str.magenta(),
    }
}

/// Colorize an audio resource status for display
pub fn colorize_audio_status(status: &AudioStatus) -> ColoredString {
    let status_str = status.as_str();
    match status {
        AudioStatus::Ok => status_str.green(),
        AudioStatus::BeingProcessed => status_str.cyan(),
        AudioStatus::Invalid => status_str.red(),
        AudioStatus::Unknown(_) => status_str.magenta(),
    }
}
