// Local invoker - runs tool calls on this machine instead of a remote sandbox

use crate::command::error::{CommandError, Result};
use crate::command::invoker::{RUN_CODE_TOOL, RemoteToolInvoker, SHELL_TOOL};
use crate::command::types::{Language, RemoteToolResponse, RunCodeArgs, ShellArgs};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio::process::Command as Process;
use tracing::{debug, info};

/// Invoker backed by local processes.
///
/// Useful for development against the same result contract as a real
/// sandbox. Each call gets a `local-<n>` request id.
pub struct LocalInvoker {
    shell: String,
    python: String,
    node: String,
    seq: AtomicU64,
}

impl LocalInvoker {
    pub fn new() -> Self {
        Self {
            shell: "/bin/sh".to_string(),
            python: "python3".to_string(),
            node: "node".to_string(),
            seq: AtomicU64::new(1),
        }
    }

    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    pub fn with_interpreters(mut self, python: impl Into<String>, node: impl Into<String>) -> Self {
        self.python = python.into();
        self.node = node.into();
        self
    }

    fn next_request_id(&self) -> String {
        format!("local-{}", self.seq.fetch_add(1, Ordering::SeqCst))
    }

    async fn run_process(
        &self,
        tool: &str,
        program: &str,
        flag: &str,
        source: &str,
        timeout: Duration,
    ) -> Result<RemoteToolResponse> {
        let request_id = self.next_request_id();
        let start = Instant::now();

        debug!(request_id = %request_id, program = %program, "spawning local process");

        let mut process = Process::new(program);
        process.arg(flag).arg(source).kill_on_drop(true);

        let output = tokio::time::timeout(timeout, process.output())
            .await
            .map_err(|_| {
                CommandError::new(format!(
                    "{} timed out after {} ms",
                    tool,
                    timeout.as_millis()
                ))
            })??;

        let exit_code = output.status.code().unwrap_or(-1);
        info!(
            request_id = %request_id,
            tool = %tool,
            duration_ms = start.elapsed().as_millis() as u64,
            exit_code = exit_code,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "local process finished"
        );

        if output.status.success() {
            Ok(RemoteToolResponse::ok(
                request_id,
                String::from_utf8_lossy(&output.stdout),
            ))
        } else {
            Ok(RemoteToolResponse::failed(
                request_id,
                String::from_utf8_lossy(&output.stderr).trim_end(),
            ))
        }
    }
}

impl Default for LocalInvoker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemoteToolInvoker for LocalInvoker {
    async fn invoke(&self, name: &str, params: serde_json::Value) -> Result<RemoteToolResponse> {
        match name {
            SHELL_TOOL => {
                let ShellArgs {
                    command,
                    timeout_ms,
                } = serde_json::from_value(params).map_err(|e| {
                    CommandError::new(format!("Invalid input for tool '{}': {}", name, e))
                })?;
                self.run_process(
                    name,
                    &self.shell,
                    "-c",
                    &command,
                    Duration::from_millis(timeout_ms),
                )
                .await
            }
            RUN_CODE_TOOL => {
                let RunCodeArgs {
                    code,
                    language,
                    timeout_s,
                } = serde_json::from_value(params).map_err(|e| {
                    CommandError::new(format!("Invalid input for tool '{}': {}", name, e))
                })?;
                let (program, flag) = match language {
                    Language::Python => (&self.python, "-c"),
                    Language::JavaScript => (&self.node, "-e"),
                };
                self.run_process(name, program, flag, &code, Duration::from_secs(timeout_s))
                    .await
            }
            other => Err(CommandError::new(format!("Unknown tool: {}", other)).into()),
        }
    }
}
