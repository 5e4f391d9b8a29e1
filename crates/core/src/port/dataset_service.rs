// Dataset Service Port
// Answers whether an identifier names an openable/saveable dataset

/// Dataset capability queries
///
/// Implementations:
/// - FormatDatasetService: matches file extensions against configured formats
pub trait DatasetService: Send + Sync {
    /// Whether `source` names a dataset that can be opened
    fn can_open(&self, source: &str) -> bool;

    /// Whether a dataset can be saved to `destination`
    fn can_save(&self, destination: &str) -> bool;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Mock DatasetService with fixed verdicts
    pub struct MockDatasetService {
        can_open: bool,
        can_save: bool,
        queries: Arc<Mutex<Vec<String>>>,
    }

    impl MockDatasetService {
        pub fn new(can_open: bool, can_save: bool) -> Self {
            Self {
                can_open,
                can_save,
                queries: Arc::new(Mutex::new(Vec::new())),
            }
        }
        pub fn accepting() -> Self {
            Self::new(true, true)
        }
        pub fn rejecting() -> Self {
            Self::new(false, false)
        }
        /// Identifiers queried so far, in order
        pub fn queries(&self) -> Vec<String> {
            self.queries.lock().unwrap().clone()
        }
    }

    impl DatasetService for MockDatasetService {
        fn can_open(&self, source: &str) -> bool {
            self.queries.lock().unwrap().push(source.to_string());
            self.can_open
        }
        fn can_save(&self, destination: &str) -> bool {
            self.queries.lock().unwrap().push(destination.to_string());
            self.can_save
        }
    }
}
