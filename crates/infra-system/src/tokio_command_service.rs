// Tokio command service
// reason: async-trait, tokio::spawn for one task per submitted command
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use dataset_io_core::domain::{CommandId, CommandInputs, CommandModule};
use dataset_io_core::port::command_service::{
    Command, CommandFuture, CommandService, ExecutionError,
};

/// Runs registered commands as tokio tasks
///
/// The registry is filled before the service is shared and is read-only
/// afterwards.
#[derive(Default)]
pub struct TokioCommandService {
    commands: HashMap<CommandId, Arc<dyn Command>>,
}

impl TokioCommandService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `command` under its own id, replacing any previous one
    pub fn register(&mut self, command: Arc<dyn Command>) {
        let id = command.id();
        if self.commands.insert(id.clone(), command).is_some() {
            warn!(command = %id, "Replaced previously registered command");
        }
    }

    /// Builder-style `register`
    pub fn with_command(mut self, command: Arc<dyn Command>) -> Self {
        self.register(command);
        self
    }

    pub fn is_registered(&self, id: &CommandId) -> bool {
        self.commands.contains_key(id)
    }

    /// Check declared inputs before anything is spawned
    fn preprocess(command: &dyn Command, inputs: &CommandInputs) -> Result<(), ExecutionError> {
        match command
            .required_inputs()
            .iter()
            .find(|label| !inputs.contains(label))
        {
            Some(label) => Err(ExecutionError::MissingInput {
                command: command.id().to_string(),
                label: label.to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CommandService for TokioCommandService {
    async fn run(
        &self,
        command: &CommandId,
        process: bool,
        inputs: CommandInputs,
    ) -> Result<CommandFuture, ExecutionError> {
        let Some(runner) = self.commands.get(command).cloned() else {
            warn!(command = %command, "Unknown command submitted");
            return Err(ExecutionError::UnknownCommand(command.to_string()));
        };

        if process {
            Self::preprocess(runner.as_ref(), &inputs)?;
        }

        debug!(command = %command, inputs = inputs.len(), "Spawning command");

        let id = command.clone();
        Ok(CommandFuture::spawn(async move {
            match runner.run(&inputs).await {
                Ok(outputs) => {
                    debug!(command = %id, outputs = outputs.len(), "Command completed");
                    Ok(CommandModule::new(id, inputs, outputs))
                }
                Err(e) => {
                    warn!(command = %id, error = %e, "Command failed");
                    Err(e)
                }
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset_io_core::domain::CommandOutputs;

    /// Echoes its `text` input to the `echo` output
    struct EchoCommand;

    #[async_trait]
    impl Command for EchoCommand {
        fn id(&self) -> CommandId {
            CommandId::new("test.echo")
        }
        fn required_inputs(&self) -> &[&'static str] {
            &["text"]
        }
        async fn run(&self, inputs: &CommandInputs) -> Result<CommandOutputs, ExecutionError> {
            let text = inputs
                .get("text")
                .and_then(|item| item.as_text())
                .unwrap_or_default()
                .to_string();
            Ok(CommandOutputs::new().with("echo", text))
        }
    }

    fn service() -> TokioCommandService {
        TokioCommandService::new().with_command(Arc::new(EchoCommand))
    }

    #[tokio::test]
    async fn test_run_spawns_registered_command() {
        let future = service()
            .run(
                &CommandId::new("test.echo"),
                true,
                CommandInputs::new().with("text", "hello"),
            )
            .await
            .unwrap();

        let module = future.join().await.unwrap();
        assert_eq!(module.command.as_str(), "test.echo");
        assert_eq!(
            module.output("echo").and_then(|item| item.as_text()),
            Some("hello")
        );
        assert!(module.inputs.contains("text"));
    }

    #[tokio::test]
    async fn test_run_unknown_command() {
        let err = service()
            .run(&CommandId::new("test.missing"), true, CommandInputs::new())
            .await
            .unwrap_err();
        assert_eq!(err, ExecutionError::UnknownCommand("test.missing".to_string()));
    }

    #[tokio::test]
    async fn test_preprocessing_rejects_missing_input() {
        let err = service()
            .run(&CommandId::new("test.echo"), true, CommandInputs::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ExecutionError::MissingInput { ref label, .. } if label == "text"));
    }

    #[tokio::test]
    async fn test_without_preprocessing_missing_input_reaches_command() {
        let future = service()
            .run(&CommandId::new("test.echo"), false, CommandInputs::new())
            .await
            .unwrap();

        let module = future.join().await.unwrap();
        assert_eq!(
            module.output("echo").and_then(|item| item.as_text()),
            Some("")
        );
    }

    #[test]
    fn test_register_replaces_same_id() {
        let mut service = service();
        service.register(Arc::new(EchoCommand));
        assert!(service.is_registered(&CommandId::new("test.echo")));
        assert_eq!(service.commands.len(), 1);
    }
}
