// Module Service Port
// Blocks on a submitted command and hands back its completed module

use super::command_service::{CommandFuture, ExecutionError};
use crate::domain::CommandModule;
use async_trait::async_trait;

/// Module Service trait
///
/// Implementations:
/// - TokioModuleService: awaits the task, optionally bounded by a timeout
#[async_trait]
pub trait ModuleService: Send + Sync {
    /// Wait until the command behind `future` completes
    ///
    /// # Errors
    /// - The command's own error, forwarded unchanged
    /// - ExecutionError::Interrupted if the wait was cut short
    async fn wait_for(&self, future: CommandFuture) -> Result<CommandModule, ExecutionError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Mock module service behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Join the future and return its result
        PassThrough,
        /// Drop the future and fail the wait
        Fail(ExecutionError),
    }

    /// Mock Module Service for testing
    pub struct MockModuleService {
        behavior: Arc<Mutex<MockBehavior>>,
        wait_count: Arc<Mutex<usize>>,
    }

    impl MockModuleService {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior: Arc::new(Mutex::new(behavior)),
                wait_count: Arc::new(Mutex::new(0)),
            }
        }
        pub fn pass_through() -> Self {
            Self::new(MockBehavior::PassThrough)
        }
        pub fn interrupted(message: impl Into<String>) -> Self {
            Self::new(MockBehavior::Fail(ExecutionError::Interrupted(message.into())))
        }
        pub fn wait_count(&self) -> usize {
            *self.wait_count.lock().unwrap()
        }
    }

    #[async_trait]
    impl ModuleService for MockModuleService {
        async fn wait_for(&self, future: CommandFuture) -> Result<CommandModule, ExecutionError> {
            *self.wait_count.lock().unwrap() += 1;

            let behavior = self.behavior.lock().unwrap().clone();

            match behavior {
                MockBehavior::PassThrough => future.join().await,
                MockBehavior::Fail(err) => {
                    future.abort();
                    Err(err)
                }
            }
        }
    }
}
