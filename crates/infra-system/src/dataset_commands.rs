// Open/save dataset commands backed by JSON documents on disk
// reason: serde_json for the document format, tokio::fs to stay off the runtime threads
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use dataset_io_core::domain::{
    open_dataset, save_dataset, CommandId, CommandInputs, CommandOutputs, Dataset, Item,
};
use dataset_io_core::port::command_service::{Command, ExecutionError};

/// Reads a dataset document from the path given as `source`
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenDatasetCommand;

/// Writes the `source` dataset to the path given as `destination`
#[derive(Debug, Clone, Copy, Default)]
pub struct SaveDatasetCommand;

fn text_input<'a>(inputs: &'a CommandInputs, label: &str) -> Result<&'a str, ExecutionError> {
    match inputs.get(label) {
        Some(Item::Text(text)) => Ok(text.as_str()),
        Some(other) => Err(ExecutionError::InvalidInput {
            label: label.to_string(),
            reason: format!("expected text, got {}", other.kind()),
        }),
        None => Err(ExecutionError::InvalidInput {
            label: label.to_string(),
            reason: "missing".to_string(),
        }),
    }
}

fn dataset_input(inputs: &CommandInputs, label: &str) -> Result<Arc<Dataset>, ExecutionError> {
    match inputs.get(label) {
        Some(Item::Dataset(dataset)) => Ok(dataset.clone()),
        Some(other) => Err(ExecutionError::InvalidInput {
            label: label.to_string(),
            reason: format!("expected dataset, got {}", other.kind()),
        }),
        None => Err(ExecutionError::InvalidInput {
            label: label.to_string(),
            reason: "missing".to_string(),
        }),
    }
}

#[async_trait]
impl Command for OpenDatasetCommand {
    fn id(&self) -> CommandId {
        CommandId::new(open_dataset::ID)
    }

    fn required_inputs(&self) -> &[&'static str] {
        &[open_dataset::SOURCE_LABEL]
    }

    async fn run(&self, inputs: &CommandInputs) -> Result<CommandOutputs, ExecutionError> {
        let source = text_input(inputs, open_dataset::SOURCE_LABEL)?;

        let bytes = tokio::fs::read(source).await?;
        let dataset: Dataset = serde_json::from_slice(&bytes)
            .map_err(|e| ExecutionError::Format(format!("{}: {}", source, e)))?;
        dataset
            .validate()
            .map_err(|e| ExecutionError::Format(format!("{}: {}", source, e)))?;

        info!(
            source = %source,
            name = dataset.name(),
            dims = ?dataset.dims(),
            "Opened dataset"
        );

        Ok(CommandOutputs::new().with(open_dataset::OUTPUT_LABEL, dataset))
    }
}

#[async_trait]
impl Command for SaveDatasetCommand {
    fn id(&self) -> CommandId {
        CommandId::new(save_dataset::ID)
    }

    fn required_inputs(&self) -> &[&'static str] {
        &[save_dataset::DESTINATION_LABEL, save_dataset::SOURCE_LABEL]
    }

    async fn run(&self, inputs: &CommandInputs) -> Result<CommandOutputs, ExecutionError> {
        let destination = text_input(inputs, save_dataset::DESTINATION_LABEL)?;
        let dataset = dataset_input(inputs, save_dataset::SOURCE_LABEL)?;

        let bytes = serde_json::to_vec_pretty(dataset.as_ref())
            .map_err(|e| ExecutionError::Format(e.to_string()))?;

        if let Some(parent) = Path::new(destination).parent() {
            if !parent.as_os_str().is_empty() {
                debug!(dir = %parent.display(), "Creating parent directories");
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(destination, &bytes).await?;

        info!(
            destination = %destination,
            name = dataset.name(),
            bytes = bytes.len(),
            "Saved dataset"
        );

        Ok(CommandOutputs::new())
    }
}
