// I/O Plugin Port (inbound)
// Contract the I/O registry expects from every open/save plugin

use crate::domain::{DataType, Item, Priority};
use crate::error::Result;
use async_trait::async_trait;

/// Plugin that opens and/or saves one data type by identifier
///
/// Implementations:
/// - DatasetIoPlugin: delegates datasets to the command framework
#[async_trait]
pub trait IoPlugin: Send + Sync {
    /// Human-readable plugin name (for logs and `probe` output)
    fn name(&self) -> &str;

    /// Type tag of the data this plugin handles
    fn data_type(&self) -> DataType;

    /// Registry ordering; higher priorities are consulted first
    fn priority(&self) -> Priority {
        Priority::NORMAL
    }

    /// Whether `source` can be opened by this plugin
    fn supports_open(&self, source: &str) -> bool;

    /// Whether data can be saved to `destination` by this plugin
    fn supports_save(&self, destination: &str) -> bool;

    /// Open `source`
    ///
    /// Returns `Ok(None)` when the plugin declines (e.g. its collaborators
    /// are not available).
    async fn open(&self, source: &str) -> Result<Option<Item>>;

    /// Save `item` to `destination`
    ///
    /// # Errors
    /// - IoError::UnsupportedData if `item` is not of this plugin's data type
    async fn save(&self, item: Item, destination: &str) -> Result<()>;
}
