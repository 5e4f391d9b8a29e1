// Item Domain Model - values exchanged with commands and I/O plugins

use super::dataset::Dataset;
use std::sync::Arc;

/// Type tag an I/O plugin handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Dataset,
}

impl DataType {
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Dataset => "Dataset",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A value bound to a command input/output label
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Dataset(Arc<Dataset>),
    Text(String),
}

impl Item {
    /// Type tag for items that I/O plugins can carry
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Item::Dataset(_) => Some(DataType::Dataset),
            Item::Text(_) => None,
        }
    }

    /// Short name of the item kind (for error messages)
    pub fn kind(&self) -> &'static str {
        match self {
            Item::Dataset(_) => "dataset",
            Item::Text(_) => "text",
        }
    }

    pub fn as_dataset(&self) -> Option<&Arc<Dataset>> {
        match self {
            Item::Dataset(ds) => Some(ds),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Item::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_dataset(self) -> Option<Arc<Dataset>> {
        match self {
            Item::Dataset(ds) => Some(ds),
            _ => None,
        }
    }
}

impl From<Arc<Dataset>> for Item {
    fn from(ds: Arc<Dataset>) -> Self {
        Item::Dataset(ds)
    }
}

impl From<Dataset> for Item {
    fn from(ds: Dataset) -> Self {
        Item::Dataset(Arc::new(ds))
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Item::Text(s.to_string())
    }
}

impl From<String> for Item {
    fn from(s: String) -> Self {
        Item::Text(s)
    }
}
