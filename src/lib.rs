//! Client-side facade for running shell commands and code snippets in a
//! remote sandbox.
//!
//! [`ExecutionService`] sends each request through a [`RemoteToolInvoker`]
//! and folds the response, or any failure, into a [`CommandResult`] or
//! [`CodeExecutionResult`]. Callers only branch on `is_success()`.

pub mod command;

pub use command::{
    ApiResponse, CodeExecutionResult, CommandConfig, CommandError, CommandResult,
    ExecutionService, FailureKind, InvokeError, Language, LocalInvoker, RemoteToolInvoker,
    RemoteToolResponse, ResponseTrace, TracingTrace,
};
