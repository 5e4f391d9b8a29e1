// Dataset I/O Plugin
// Delegates dataset open/save to the command framework

use crate::domain::{
    open_dataset, save_dataset, CommandId, CommandInputs, DataType, Dataset, Item, Priority,
};
use crate::error::{IoError, Result};
use crate::port::{CommandService, DatasetService, IoPlugin, ModuleService};
use async_trait::async_trait;
use std::sync::Arc;

pub const PLUGIN_NAME: &str = "dataset-io";

/// I/O plugin for datasets
///
/// Every collaborator is optional. Without a dataset service the plugin
/// supports nothing; without the command or module service it declines to
/// open (`None`) and skips saving, so the registry can move on.
#[derive(Clone, Default)]
pub struct DatasetIoPlugin {
    command_service: Option<Arc<dyn CommandService>>,
    module_service: Option<Arc<dyn ModuleService>>,
    dataset_service: Option<Arc<dyn DatasetService>>,
}

impl DatasetIoPlugin {
    pub fn new(
        command_service: Option<Arc<dyn CommandService>>,
        module_service: Option<Arc<dyn ModuleService>>,
        dataset_service: Option<Arc<dyn DatasetService>>,
    ) -> Self {
        Self {
            command_service,
            module_service,
            dataset_service,
        }
    }

    /// Start from a plugin with no collaborators bound
    pub fn builder() -> DatasetIoPluginBuilder {
        DatasetIoPluginBuilder::default()
    }

    /// Open `source` as a dataset
    ///
    /// # Errors
    /// - IoError::Execution if submitting or waiting on the command fails
    /// - IoError::UnexpectedOutput if the command produced a non-dataset
    pub async fn open_dataset(&self, source: &str) -> Result<Option<Arc<Dataset>>> {
        let (Some(commands), Some(modules)) = (&self.command_service, &self.module_service)
        else {
            return Ok(None);
        };

        let inputs = CommandInputs::new().with(open_dataset::SOURCE_LABEL, source);
        let future = commands
            .run(&CommandId::new(open_dataset::ID), true, inputs)
            .await?;
        let mut module = modules.wait_for(future).await?;

        match module.take_output(open_dataset::OUTPUT_LABEL) {
            None => Ok(None),
            Some(Item::Dataset(dataset)) => Ok(Some(dataset)),
            Some(other) => Err(IoError::UnexpectedOutput {
                label: open_dataset::OUTPUT_LABEL.to_string(),
                found: other.kind().to_string(),
            }),
        }
    }

    /// Save `dataset` to `destination`
    ///
    /// # Errors
    /// - IoError::Execution if submitting or waiting on the command fails
    pub async fn save_dataset(&self, dataset: Arc<Dataset>, destination: &str) -> Result<()> {
        let (Some(commands), Some(modules)) = (&self.command_service, &self.module_service)
        else {
            return Ok(());
        };

        let inputs = CommandInputs::new()
            .with(save_dataset::DESTINATION_LABEL, destination)
            .with(save_dataset::SOURCE_LABEL, dataset);
        let future = commands
            .run(&CommandId::new(save_dataset::ID), true, inputs)
            .await?;
        modules.wait_for(future).await?;

        Ok(())
    }
}

#[async_trait]
impl IoPlugin for DatasetIoPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn data_type(&self) -> DataType {
        DataType::Dataset
    }

    fn priority(&self) -> Priority {
        Priority::LOW
    }

    fn supports_open(&self, source: &str) -> bool {
        match &self.dataset_service {
            Some(datasets) => datasets.can_open(source),
            None => false,
        }
    }

    fn supports_save(&self, destination: &str) -> bool {
        match &self.dataset_service {
            Some(datasets) => datasets.can_save(destination),
            None => false,
        }
    }

    async fn open(&self, source: &str) -> Result<Option<Item>> {
        Ok(self.open_dataset(source).await?.map(Item::Dataset))
    }

    async fn save(&self, item: Item, destination: &str) -> Result<()> {
        match item {
            Item::Dataset(dataset) => self.save_dataset(dataset, destination).await,
            other => Err(IoError::UnsupportedData {
                expected: DataType::Dataset.to_string(),
                found: other.kind().to_string(),
            }),
        }
    }
}

/// Binds collaborators one at a time
#[derive(Default)]
pub struct DatasetIoPluginBuilder {
    plugin: DatasetIoPlugin,
}

impl DatasetIoPluginBuilder {
    pub fn command_service(mut self, service: Arc<dyn CommandService>) -> Self {
        self.plugin.command_service = Some(service);
        self
    }

    pub fn module_service(mut self, service: Arc<dyn ModuleService>) -> Self {
        self.plugin.module_service = Some(service);
        self
    }

    pub fn dataset_service(mut self, service: Arc<dyn DatasetService>) -> Self {
        self.plugin.dataset_service = Some(service);
        self
    }

    pub fn build(self) -> DatasetIoPlugin {
        self.plugin
    }
}
