// Command Domain Model - named units of work and their completed runs

use super::item::Item;
use std::collections::HashMap;

/// Name of a unit of work
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandId(String);

impl CommandId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Open a dataset from a source identifier
pub mod open_dataset {
    pub const ID: &str = "dataset.open";
    pub const SOURCE_LABEL: &str = "source";
    pub const OUTPUT_LABEL: &str = "dataset";
}

/// Save a dataset to a destination identifier
pub mod save_dataset {
    pub const ID: &str = "dataset.save";
    pub const DESTINATION_LABEL: &str = "destination";
    pub const SOURCE_LABEL: &str = "source";
}

/// Label -> item map used for both inputs and outputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemMap(HashMap<String, Item>);

pub type CommandInputs = ItemMap;
pub type CommandOutputs = ItemMap;

impl ItemMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, label: impl Into<String>, item: impl Into<Item>) -> Self {
        self.0.insert(label.into(), item.into());
        self
    }

    pub fn insert(&mut self, label: impl Into<String>, item: impl Into<Item>) {
        self.0.insert(label.into(), item.into());
    }

    pub fn get(&self, label: &str) -> Option<&Item> {
        self.0.get(label)
    }

    pub fn remove(&mut self, label: &str) -> Option<Item> {
        self.0.remove(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Completed run of a command
#[derive(Debug, Clone)]
pub struct CommandModule {
    pub command: CommandId,
    pub inputs: CommandInputs,
    pub outputs: CommandOutputs,
}

impl CommandModule {
    pub fn new(command: CommandId, inputs: CommandInputs, outputs: CommandOutputs) -> Self {
        Self {
            command,
            inputs,
            outputs,
        }
    }

    pub fn output(&self, label: &str) -> Option<&Item> {
        self.outputs.get(label)
    }

    /// Take an output by value, leaving the module without it
    pub fn take_output(&mut self, label: &str) -> Option<Item> {
        self.outputs.remove(label)
    }
}
