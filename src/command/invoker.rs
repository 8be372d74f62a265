// Remote tool invoker trait

use crate::command::error::Result;
use crate::command::types::RemoteToolResponse;
use async_trait::async_trait;

/// Capability name for shell commands
pub const SHELL_TOOL: &str = "shell";

/// Capability name for code snippets
pub const RUN_CODE_TOOL: &str = "run_code";

/// Dispatches a named operation to the remote execution environment.
///
/// Implemented by a real transport or by a test stub. Raising
/// [`InvokeError::Command`](crate::command::InvokeError::Command) signals a
/// structured execution failure; any other variant is treated as unexpected.
#[async_trait]
pub trait RemoteToolInvoker: Send + Sync {
    async fn invoke(&self, name: &str, params: serde_json::Value) -> Result<RemoteToolResponse>;
}
