// Extension-based dataset capability service
use std::path::Path;
use tracing::debug;

use dataset_io_core::port::DatasetService;

use crate::config::{parse_extensions, FormatConfig};

/// Decides openability/saveability from the identifier's file extension
///
/// Opening additionally requires the identifier to name an existing file.
#[derive(Debug, Clone)]
pub struct FormatDatasetService {
    open_extensions: Vec<String>,
    save_extensions: Vec<String>,
}

impl FormatDatasetService {
    pub fn new(config: &FormatConfig) -> Self {
        // Normalize in case the config was built by hand.
        Self {
            open_extensions: parse_extensions(&config.open_extensions.join(",")),
            save_extensions: parse_extensions(&config.save_extensions.join(",")),
        }
    }

    fn extension(id: &str) -> Option<String> {
        Path::new(id)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }

    fn matches(extensions: &[String], id: &str) -> bool {
        Self::extension(id).is_some_and(|ext| extensions.contains(&ext))
    }
}

impl Default for FormatDatasetService {
    fn default() -> Self {
        Self::new(&FormatConfig::default())
    }
}

impl DatasetService for FormatDatasetService {
    fn can_open(&self, source: &str) -> bool {
        let supported = Self::matches(&self.open_extensions, source) && Path::new(source).is_file();
        debug!(source = %source, supported, "Dataset open capability");
        supported
    }

    fn can_save(&self, destination: &str) -> bool {
        let supported = Self::matches(&self.save_extensions, destination);
        debug!(destination = %destination, supported, "Dataset save capability");
        supported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_save_matches_extension_case_insensitively() {
        let service = FormatDatasetService::default();
        assert!(service.can_save("out/cells.json"));
        assert!(service.can_save("CELLS.JSON"));
        assert!(!service.can_save("cells.tif"));
        assert!(!service.can_save("no_extension"));
    }

    #[test]
    fn test_can_open_requires_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("present.json");
        std::fs::write(&present, "{}").unwrap();
        let absent = dir.path().join("absent.json");

        let service = FormatDatasetService::default();
        assert!(service.can_open(present.to_str().unwrap()));
        assert!(!service.can_open(absent.to_str().unwrap()));
    }

    #[test]
    fn test_can_open_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("a.tif");
        std::fs::write(&image, b"II*\0").unwrap();

        let service = FormatDatasetService::default();
        assert!(!service.can_open(image.to_str().unwrap()));
    }

    #[test]
    fn test_configured_extensions_are_normalized() {
        let config = FormatConfig {
            open_extensions: vec![".TIF".to_string()],
            save_extensions: vec!["Tif".to_string(), "json".to_string()],
        };
        let service = FormatDatasetService::new(&config);
        assert!(service.can_save("a.tif"));
        assert!(service.can_save("a.json"));
        assert_eq!(service.open_extensions, vec!["tif"]);
    }
}
