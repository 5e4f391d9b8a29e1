// Port Layer - Interfaces for external collaborators

pub mod command_service;
pub mod dataset_service;
pub mod io_plugin; // Inbound: what the registry calls
pub mod module_service;

// Re-exports
pub use command_service::{Command, CommandFuture, CommandService, ExecutionError};
pub use dataset_service::DatasetService;
pub use io_plugin::IoPlugin;
pub use module_service::ModuleService;
