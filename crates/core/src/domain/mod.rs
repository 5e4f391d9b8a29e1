// Domain Layer - Pure data types

pub mod command;
pub mod dataset;
pub mod error;
pub mod item;
pub mod plugin;

// Re-exports
pub use command::{
    open_dataset, save_dataset, CommandId, CommandInputs, CommandModule, CommandOutputs, ItemMap,
};
pub use dataset::Dataset;
pub use error::DomainError;
pub use item::{DataType, Item};
pub use plugin::Priority;
