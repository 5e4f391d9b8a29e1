// Dataset I/O Infrastructure - System Adapters
// Implements: CommandService, ModuleService, DatasetService, dataset commands

pub mod config;
pub mod dataset_commands;
pub mod format_dataset_service;
pub mod tokio_command_service;
pub mod tokio_module_service;

pub use config::{ExecutionConfig, FormatConfig};
pub use dataset_commands::{OpenDatasetCommand, SaveDatasetCommand};
pub use format_dataset_service::FormatDatasetService;
pub use tokio_command_service::TokioCommandService;
pub use tokio_module_service::TokioModuleService;

use dataset_io_core::application::DatasetIoPlugin;
use std::sync::Arc;

/// Command service with the dataset open/save commands registered
pub fn dataset_command_service() -> TokioCommandService {
    TokioCommandService::new()
        .with_command(Arc::new(OpenDatasetCommand))
        .with_command(Arc::new(SaveDatasetCommand))
}

/// Dataset plugin with every collaborator bound to the system adapters
pub fn wired_dataset_plugin(
    execution: &ExecutionConfig,
    formats: &FormatConfig,
) -> DatasetIoPlugin {
    DatasetIoPlugin::builder()
        .command_service(Arc::new(dataset_command_service()))
        .module_service(Arc::new(TokioModuleService::from_config(execution)))
        .dataset_service(Arc::new(FormatDatasetService::new(formats)))
        .build()
}
