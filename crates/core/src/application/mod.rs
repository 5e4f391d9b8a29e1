// Application Layer - I/O plugins and the registry that dispatches to them

pub mod dataset_io;
pub mod io_service;

// Re-exports
pub use dataset_io::{DatasetIoPlugin, DatasetIoPluginBuilder};
pub use io_service::IoService;
