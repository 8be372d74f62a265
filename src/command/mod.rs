// Command module - shell and code execution in a remote sandbox

pub mod config;
pub mod error;
pub mod invoker;
pub mod local;
pub mod service;
pub mod trace;
pub mod types;

pub use config::CommandConfig;
pub use error::{CommandError, InvokeError, Result, UnsupportedLanguage};
pub use invoker::{RUN_CODE_TOOL, RemoteToolInvoker, SHELL_TOOL};
pub use local::LocalInvoker;
pub use service::ExecutionService;
pub use trace::{ResponseTrace, TracingTrace};
pub use types::{
    ApiResponse, CodeExecutionResult, CommandResult, FailureKind, Language, RemoteToolResponse,
};
