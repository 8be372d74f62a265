// Data types for Command module

use crate::command::error::UnsupportedLanguage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Common surface of every result handed back to callers
pub trait ApiResponse {
    /// Correlation id assigned by the remote system, empty when no call produced one
    fn request_id(&self) -> &str;
}

/// Where a failed result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Rejected locally before any remote call
    Validation,
    /// Remote call completed but reported `success = false`
    Remote,
    /// Invoker raised an execution-domain failure
    Command,
    /// Invoker raised anything else
    Unexpected,
}

/// Result of a shell command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    request_id: String,
    success: bool,
    output: String,
    error_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    failure_kind: Option<FailureKind>,
}

impl CommandResult {
    pub fn success(request_id: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            success: true,
            output: output.into(),
            error_message: String::new(),
            failure_kind: None,
        }
    }

    pub fn failure(
        request_id: impl Into<String>,
        kind: FailureKind,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            success: false,
            output: String::new(),
            error_message: error_message.into(),
            failure_kind: Some(kind),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Command output, empty on failure
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Failure description, empty on success
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.failure_kind
    }
}

impl ApiResponse for CommandResult {
    fn request_id(&self) -> &str {
        &self.request_id
    }
}

/// Result of a code snippet run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExecutionResult {
    request_id: String,
    success: bool,
    result: String,
    error_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    failure_kind: Option<FailureKind>,
}

impl CodeExecutionResult {
    pub fn success(request_id: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            success: true,
            result: result.into(),
            error_message: String::new(),
            failure_kind: None,
        }
    }

    pub fn failure(
        request_id: impl Into<String>,
        kind: FailureKind,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            success: false,
            result: String::new(),
            error_message: error_message.into(),
            failure_kind: Some(kind),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Execution result, empty on failure
    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.failure_kind
    }
}

impl ApiResponse for CodeExecutionResult {
    fn request_id(&self) -> &str {
        &self.request_id
    }
}

/// Raw response produced by a remote-tool invoker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteToolResponse {
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub success: bool,
    /// Payload, meaningful only when `success`
    #[serde(default)]
    pub data: String,
    /// Meaningful only when not `success`
    #[serde(default)]
    pub error_message: String,
}

impl RemoteToolResponse {
    pub fn ok(request_id: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            success: true,
            data: data.into(),
            error_message: String::new(),
        }
    }

    pub fn failed(request_id: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            success: false,
            data: String::new(),
            error_message: error_message.into(),
        }
    }
}

/// Languages accepted by `run_code`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
        }
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    // Exact match only, no case folding or trimming
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "python" => Ok(Language::Python),
            "javascript" => Ok(Language::JavaScript),
            other => Err(UnsupportedLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for the "shell" capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellArgs {
    pub command: String,
    pub timeout_ms: u64,
}

/// Parameters for the "run_code" capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunCodeArgs {
    pub code: String,
    pub language: Language,
    pub timeout_s: u64,
}
