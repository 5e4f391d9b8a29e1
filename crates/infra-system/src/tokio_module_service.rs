// Tokio module service
// reason: tokio::time::timeout bounds a single wait (ExecutionConfig)
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::timeout;
use tracing::warn;

use dataset_io_core::domain::CommandModule;
use dataset_io_core::port::command_service::{CommandFuture, ExecutionError};
use dataset_io_core::port::ModuleService;

use crate::config::ExecutionConfig;

/// Awaits submitted commands, optionally bounded by a timeout
///
/// A wait that times out aborts the underlying task.
#[derive(Debug, Clone, Default)]
pub struct TokioModuleService {
    wait_timeout_ms: Option<u64>,
}

impl TokioModuleService {
    pub fn new(wait_timeout_ms: Option<u64>) -> Self {
        Self { wait_timeout_ms }
    }

    pub fn from_config(config: &ExecutionConfig) -> Self {
        Self::new(config.wait_timeout_ms)
    }
}

#[async_trait]
impl ModuleService for TokioModuleService {
    async fn wait_for(&self, future: CommandFuture) -> Result<CommandModule, ExecutionError> {
        let Some(limit_ms) = self.wait_timeout_ms else {
            return future.join().await;
        };

        let abort_handle = match &future {
            CommandFuture::Pending(handle) => Some(handle.abort_handle()),
            CommandFuture::Ready(_) => None,
        };

        match timeout(Duration::from_millis(limit_ms), future.join()).await {
            Ok(result) => result,
            Err(_) => {
                if let Some(handle) = abort_handle {
                    handle.abort();
                }
                warn!(timeout_ms = limit_ms, "Command wait timed out");
                Err(ExecutionError::Timeout(limit_ms))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset_io_core::domain::{CommandId, CommandInputs, CommandOutputs};

    fn module() -> CommandModule {
        CommandModule::new(
            CommandId::new("test.noop"),
            CommandInputs::new(),
            CommandOutputs::new(),
        )
    }

    #[tokio::test]
    async fn test_wait_returns_completed_module() {
        let service = TokioModuleService::default();
        let future = CommandFuture::spawn(async { Ok(module()) });

        let result = service.wait_for(future).await.unwrap();
        assert_eq!(result.command.as_str(), "test.noop");
    }

    #[tokio::test]
    async fn test_wait_forwards_command_error() {
        let service = TokioModuleService::new(Some(5_000));
        let future = CommandFuture::spawn(async { Err(ExecutionError::Failed("bad".to_string())) });

        let err = service.wait_for(future).await.unwrap_err();
        assert_eq!(err, ExecutionError::Failed("bad".to_string()));
    }

    #[tokio::test]
    async fn test_wait_times_out() {
        let service = TokioModuleService::new(Some(20));
        let future = CommandFuture::spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(module())
        });

        let err = service.wait_for(future).await.unwrap_err();
        assert_eq!(err, ExecutionError::Timeout(20));
    }

    #[tokio::test]
    async fn test_wait_on_cancelled_task_is_interrupted() {
        let service = TokioModuleService::default();
        let future = CommandFuture::spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(module())
        });
        future.abort();

        let err = service.wait_for(future).await.unwrap_err();
        assert!(matches!(err, ExecutionError::Interrupted(_)));
    }

    #[test]
    fn test_from_config() {
        let config = ExecutionConfig {
            wait_timeout_ms: Some(750),
        };
        let service = TokioModuleService::from_config(&config);
        assert_eq!(service.wait_timeout_ms, Some(750));
    }

    #[tokio::test]
    async fn test_largest_timeout_is_kept_exactly() {
        let service = TokioModuleService::new(Some(u64::MAX));
        assert_eq!(service.wait_timeout_ms, Some(u64::MAX));

        let result = service
            .wait_for(CommandFuture::ready(Ok(module())))
            .await
            .unwrap();
        assert_eq!(result.command.as_str(), "test.noop");
    }
}
