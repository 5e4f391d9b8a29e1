// I/O Service - registry that dispatches open/save to plugins

use crate::domain::Item;
use crate::error::{IoError, Result};
use crate::port::IoPlugin;
use std::sync::Arc;
use tracing::{debug, warn};

/// Pluggable open/save dispatcher
///
/// Plugins are kept in descending priority order; plugins with equal
/// priority keep their registration order.
#[derive(Clone, Default)]
pub struct IoService {
    plugins: Vec<Arc<dyn IoPlugin>>,
}

impl IoService {
    pub fn new(plugins: Vec<Arc<dyn IoPlugin>>) -> Self {
        let mut service = Self::default();
        for plugin in plugins {
            service.register(plugin);
        }
        service
    }

    /// Insert `plugin` after every plugin of greater or equal priority
    pub fn register(&mut self, plugin: Arc<dyn IoPlugin>) {
        let priority = plugin.priority();
        let index = self
            .plugins
            .iter()
            .position(|p| p.priority() < priority)
            .unwrap_or(self.plugins.len());
        debug!(
            plugin = plugin.name(),
            data_type = %plugin.data_type(),
            priority = %priority,
            index,
            "Registered I/O plugin"
        );
        self.plugins.insert(index, plugin);
    }

    pub fn plugins(&self) -> &[Arc<dyn IoPlugin>] {
        &self.plugins
    }

    /// First plugin that supports opening `source`
    pub fn opener(&self, source: &str) -> Option<Arc<dyn IoPlugin>> {
        self.plugins
            .iter()
            .find(|p| p.supports_open(source))
            .cloned()
    }

    /// First plugin of the item's data type that supports saving to `destination`
    pub fn saver(&self, item: &Item, destination: &str) -> Option<Arc<dyn IoPlugin>> {
        let data_type = item.data_type()?;
        self.plugins
            .iter()
            .filter(|p| p.data_type() == data_type)
            .find(|p| p.supports_save(destination))
            .cloned()
    }

    /// Open `source` with the first plugin that supports it
    ///
    /// Returns `Ok(None)` if no plugin supports the source or the chosen
    /// plugin declines.
    pub async fn open(&self, source: &str) -> Result<Option<Item>> {
        let Some(plugin) = self.opener(source) else {
            warn!(source = %source, "No I/O plugin supports opening source");
            return Ok(None);
        };

        debug!(source = %source, plugin = plugin.name(), "Opening");
        let item = plugin.open(source).await?;
        if item.is_none() {
            warn!(source = %source, plugin = plugin.name(), "I/O plugin declined to open source");
        }
        Ok(item)
    }

    /// Save `item` to `destination` with the first matching plugin
    ///
    /// # Errors
    /// - IoError::NoSaver if no plugin supports the item/destination pair
    pub async fn save(&self, item: Item, destination: &str) -> Result<()> {
        let Some(plugin) = self.saver(&item, destination) else {
            warn!(destination = %destination, kind = item.kind(), "No I/O plugin supports saving");
            return Err(IoError::NoSaver(destination.to_string()));
        };

        debug!(destination = %destination, plugin = plugin.name(), "Saving");
        plugin.save(item, destination).await
    }
}
