// Error types for Command module

use thiserror::Error;

/// Execution-domain failure raised by an invoker.
///
/// The message is shown to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct CommandError(pub String);

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Anything a remote-tool invoker may raise
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Known platform failure reported by the client SDK
    #[error("{0}")]
    Sdk(String),

    #[error("{0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl InvokeError {
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport(detail.into())
    }

    pub fn sdk(message: impl Into<String>) -> Self {
        Self::Sdk(message.into())
    }

    /// True when the failure already belongs to the execution domain
    pub fn is_command(&self) -> bool {
        matches!(self, Self::Command(_))
    }
}

/// Local validation failure for `run_code`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported language: {0}. Supported languages are 'python' and 'javascript'")]
pub struct UnsupportedLanguage(pub String);

pub type Result<T> = std::result::Result<T, InvokeError>;
