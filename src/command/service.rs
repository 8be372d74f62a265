// Execution service - shell and code execution in the remote sandbox

use crate::command::config::CommandConfig;
use crate::command::error::{CommandError, InvokeError, Result};
use crate::command::invoker::{RUN_CODE_TOOL, RemoteToolInvoker, SHELL_TOOL};
use crate::command::trace::{ResponseTrace, TracingTrace};
use crate::command::types::{
    CodeExecutionResult, CommandResult, FailureKind, Language, RemoteToolResponse, RunCodeArgs,
    ShellArgs,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

const EXECUTE_COMMAND_FAILED: &str = "Failed to execute command";
const RUN_CODE_FAILED: &str = "Failed to run code";

/// Normalized outcome of one invoker call, before it is shaped into a result type
enum Outcome {
    Done {
        request_id: String,
        data: String,
    },
    Failed {
        request_id: String,
        kind: FailureKind,
        message: String,
    },
}

/// Narrow a raised failure to the execution domain where possible.
///
/// SDK-level failures become a [`CommandError`] carrying the same message;
/// anything else is handed back unchanged.
fn handle_error(e: InvokeError) -> std::result::Result<CommandError, InvokeError> {
    match e {
        InvokeError::Command(e) => Ok(e),
        InvokeError::Sdk(message) => Ok(CommandError(message)),
        other => Err(other),
    }
}

/// Runs commands and code through a remote-tool invoker.
///
/// Both operations are total: every failure is folded into the returned
/// result with `success = false`.
#[derive(Clone)]
pub struct ExecutionService {
    invoker: Arc<dyn RemoteToolInvoker>,
    trace: Arc<dyn ResponseTrace>,
    config: CommandConfig,
}

impl ExecutionService {
    pub fn new(invoker: Arc<dyn RemoteToolInvoker>) -> Self {
        Self::with_config(invoker, CommandConfig::default())
    }

    pub fn with_config(invoker: Arc<dyn RemoteToolInvoker>, config: CommandConfig) -> Self {
        Self {
            invoker,
            trace: Arc::new(TracingTrace),
            config,
        }
    }

    /// Replace the response trace hook
    pub fn with_trace(mut self, trace: Arc<dyn ResponseTrace>) -> Self {
        self.trace = trace;
        self
    }

    pub fn config(&self) -> &CommandConfig {
        &self.config
    }

    /// Execute a shell command with the configured default timeout
    pub async fn execute_command(&self, command: &str) -> CommandResult {
        self.execute_command_with_timeout(command, self.config.command_timeout_ms)
            .await
    }

    /// Execute a shell command; the timeout is enforced remotely
    pub async fn execute_command_with_timeout(
        &self,
        command: &str,
        timeout_ms: u64,
    ) -> CommandResult {
        let args = ShellArgs {
            command: command.to_string(),
            timeout_ms,
        };

        match self.call(SHELL_TOOL, &args, EXECUTE_COMMAND_FAILED).await {
            Outcome::Done { request_id, data } => CommandResult::success(request_id, data),
            Outcome::Failed {
                request_id,
                kind,
                message,
            } => CommandResult::failure(request_id, kind, message),
        }
    }

    /// Run a code snippet with the configured default timeout
    pub async fn run_code(&self, code: &str, language: &str) -> CodeExecutionResult {
        self.run_code_with_timeout(code, language, self.config.code_timeout_secs)
            .await
    }

    /// Run a code snippet. `language` must be exactly "python" or "javascript".
    pub async fn run_code_with_timeout(
        &self,
        code: &str,
        language: &str,
        timeout_s: u64,
    ) -> CodeExecutionResult {
        let language: Language = match language.parse() {
            Ok(l) => l,
            Err(e) => {
                debug!(error = %e, "rejecting run_code request");
                return CodeExecutionResult::failure("", FailureKind::Validation, e.to_string());
            }
        };

        let args = RunCodeArgs {
            code: code.to_string(),
            language,
            timeout_s,
        };

        match self.call(RUN_CODE_TOOL, &args, RUN_CODE_FAILED).await {
            Outcome::Done { request_id, data } => CodeExecutionResult::success(request_id, data),
            Outcome::Failed {
                request_id,
                kind,
                message,
            } => CodeExecutionResult::failure(request_id, kind, message),
        }
    }

    /// Invoke a tool and fold every response or failure into an [`Outcome`].
    ///
    /// `failed` doubles as the fallback message for a bare remote failure and
    /// as the prefix for unexpected failures.
    async fn call<A: Serialize>(&self, tool: &str, args: &A, failed: &str) -> Outcome {
        match self.invoke(tool, args).await {
            Ok(response) if response.success => Outcome::Done {
                request_id: response.request_id,
                data: response.data,
            },
            Ok(response) => {
                let message = if response.error_message.is_empty() {
                    failed.to_string()
                } else {
                    response.error_message
                };
                Outcome::Failed {
                    request_id: response.request_id,
                    kind: FailureKind::Remote,
                    message,
                }
            }
            Err(e) => {
                warn!(tool = %tool, error = %e, "remote tool call raised");
                // The request id may not exist yet, so it is always dropped here
                match handle_error(e) {
                    Ok(e) => Outcome::Failed {
                        request_id: String::new(),
                        kind: FailureKind::Command,
                        message: e.to_string(),
                    },
                    Err(other) => Outcome::Failed {
                        request_id: String::new(),
                        kind: FailureKind::Unexpected,
                        message: format!("{}: {}", failed, other),
                    },
                }
            }
        }
    }

    async fn invoke<A: Serialize>(&self, tool: &str, args: &A) -> Result<RemoteToolResponse> {
        let params = serde_json::to_value(args)?;
        debug!(tool = %tool, "invoking remote tool");

        let response = self.invoker.invoke(tool, params).await?;
        self.trace.record(tool, &response);
        Ok(response)
    }
}
