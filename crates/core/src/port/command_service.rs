// Command Service Port
// Abstraction for running named units of work asynchronously

use crate::domain::{CommandId, CommandInputs, CommandModule, CommandOutputs};
use async_trait::async_trait;
use std::future::Future;
use thiserror::Error;
use tokio::task::JoinHandle;

/// Execution errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Command {command} is missing required input '{label}'")]
    MissingInput { command: String, label: String },

    #[error("Invalid input '{label}': {reason}")]
    InvalidInput { label: String, reason: String },

    #[error("Command failed: {0}")]
    Failed(String),

    #[error("Interrupted while waiting for command: {0}")]
    Interrupted(String),

    #[error("Command panicked: {0}")]
    Panicked(String),

    #[error("Command timeout after {0}ms")]
    Timeout(u64),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Format error: {0}")]
    Format(String),
}

impl From<std::io::Error> for ExecutionError {
    fn from(err: std::io::Error) -> Self {
        ExecutionError::Io(err.to_string())
    }
}

/// Handle to a submitted command
///
/// Either a task running on the tokio runtime or an already-known result.
#[derive(Debug)]
pub enum CommandFuture {
    Pending(JoinHandle<Result<CommandModule, ExecutionError>>),
    Ready(Result<CommandModule, ExecutionError>),
}

impl CommandFuture {
    /// Spawn `fut` on the current tokio runtime
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime (same as `tokio::spawn`).
    pub fn spawn<F>(fut: F) -> Self
    where
        F: Future<Output = Result<CommandModule, ExecutionError>> + Send + 'static,
    {
        CommandFuture::Pending(tokio::spawn(fut))
    }

    pub fn ready(result: Result<CommandModule, ExecutionError>) -> Self {
        CommandFuture::Ready(result)
    }

    pub fn is_finished(&self) -> bool {
        match self {
            CommandFuture::Pending(handle) => handle.is_finished(),
            CommandFuture::Ready(_) => true,
        }
    }

    /// Cancel a running task; waiting afterwards reports `Interrupted`
    pub fn abort(&self) {
        if let CommandFuture::Pending(handle) = self {
            handle.abort();
        }
    }

    /// Wait for the command to complete
    ///
    /// # Errors
    /// - The command's own error
    /// - ExecutionError::Interrupted if the task was cancelled
    /// - ExecutionError::Panicked if the task panicked
    pub async fn join(self) -> Result<CommandModule, ExecutionError> {
        match self {
            CommandFuture::Ready(result) => result,
            CommandFuture::Pending(handle) => match handle.await {
                Ok(result) => result,
                Err(e) if e.is_cancelled() => {
                    Err(ExecutionError::Interrupted("task cancelled".to_string()))
                }
                Err(e) => Err(ExecutionError::Panicked(e.to_string())),
            },
        }
    }
}

/// A named unit of work
#[async_trait]
pub trait Command: Send + Sync {
    /// Identifier the command is registered under
    fn id(&self) -> CommandId;

    /// Input labels checked before execution when pre-processing is requested
    fn required_inputs(&self) -> &[&'static str] {
        &[]
    }

    /// Run the command to completion
    async fn run(&self, inputs: &CommandInputs) -> Result<CommandOutputs, ExecutionError>;
}

/// Command Service trait
///
/// Implementations:
/// - TokioCommandService: spawns registered commands on the tokio runtime
#[async_trait]
pub trait CommandService: Send + Sync {
    /// Submit a command and return a handle to its completion
    ///
    /// # Arguments
    /// * `command` - Identifier of the command to run
    /// * `process` - Run pre-processing (input validation) before execution
    /// * `inputs` - Labelled input values
    ///
    /// # Errors
    /// - ExecutionError::UnknownCommand if nothing is registered under `command`
    /// - ExecutionError::MissingInput if `process` is set and a required input is absent
    async fn run(
        &self,
        command: &CommandId,
        process: bool,
        inputs: CommandInputs,
    ) -> Result<CommandFuture, ExecutionError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// One recorded call to `CommandService::run`
    #[derive(Debug, Clone)]
    pub struct RecordedRun {
        pub command: CommandId,
        pub process: bool,
        pub inputs: CommandInputs,
    }

    /// Mock command service behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Complete with the given outputs
        Complete(CommandOutputs),
        /// Reject the submission itself
        RejectSubmit(ExecutionError),
        /// Accept the submission, then fail the command
        FailCommand(ExecutionError),
    }

    /// Mock Command Service for testing
    pub struct MockCommandService {
        behavior: Arc<Mutex<MockBehavior>>,
        runs: Arc<Mutex<Vec<RecordedRun>>>,
    }

    impl MockCommandService {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior: Arc::new(Mutex::new(behavior)),
                runs: Arc::new(Mutex::new(Vec::new())),
            }
        }
        pub fn completing_with(outputs: CommandOutputs) -> Self {
            Self::new(MockBehavior::Complete(outputs))
        }
        pub fn rejecting(err: ExecutionError) -> Self {
            Self::new(MockBehavior::RejectSubmit(err))
        }
        pub fn failing(err: ExecutionError) -> Self {
            Self::new(MockBehavior::FailCommand(err))
        }
        pub fn set_behavior(&self, behavior: MockBehavior) {
            *self.behavior.lock().unwrap() = behavior;
        }
        pub fn runs(&self) -> Vec<RecordedRun> {
            self.runs.lock().unwrap().clone()
        }
        pub fn run_count(&self) -> usize {
            self.runs.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CommandService for MockCommandService {
        async fn run(
            &self,
            command: &CommandId,
            process: bool,
            inputs: CommandInputs,
        ) -> Result<CommandFuture, ExecutionError> {
            self.runs.lock().unwrap().push(RecordedRun {
                command: command.clone(),
                process,
                inputs: inputs.clone(),
            });

            let behavior = self.behavior.lock().unwrap().clone();

            match behavior {
                MockBehavior::Complete(outputs) => Ok(CommandFuture::ready(Ok(
                    CommandModule::new(command.clone(), inputs, outputs),
                ))),
                MockBehavior::RejectSubmit(err) => Err(err),
                MockBehavior::FailCommand(err) => Ok(CommandFuture::ready(Err(err))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ready_future_returns_result() {
        let module = CommandModule::new(
            CommandId::new("noop"),
            CommandInputs::new(),
            CommandOutputs::new(),
        );
        let fut = CommandFuture::ready(Ok(module));
        assert!(fut.is_finished());
        assert_eq!(fut.join().await.unwrap().command.as_str(), "noop");
    }

    #[tokio::test]
    async fn test_aborted_future_reports_interrupted() {
        let fut = CommandFuture::spawn(async {
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
            Err(ExecutionError::Failed("unreachable".to_string()))
        });
        fut.abort();

        let err = fut.join().await.unwrap_err();
        assert!(matches!(err, ExecutionError::Interrupted(_)));
    }

    #[tokio::test]
    async fn test_panicking_future_reports_panicked() {
        let fut = CommandFuture::spawn(async {
            let explode = true;
            if explode {
                panic!("boom");
            }
            Err(ExecutionError::Failed("unreachable".to_string()))
        });

        let err = fut.join().await.unwrap_err();
        assert!(matches!(err, ExecutionError::Panicked(_)));
    }
}
