// Response tracing hook

use crate::command::types::RemoteToolResponse;
use tracing::debug;

const PREVIEW_CHARS: usize = 200;

/// Observes every raw response returned by the invoker
pub trait ResponseTrace: Send + Sync {
    fn record(&self, tool: &str, response: &RemoteToolResponse);
}

/// Default hook, emits a debug event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTrace;

impl ResponseTrace for TracingTrace {
    fn record(&self, tool: &str, response: &RemoteToolResponse) {
        debug!(
            tool = %tool,
            request_id = %response.request_id,
            success = response.success,
            data_preview = %preview(&response.data),
            error_message = %response.error_message,
            "remote tool response"
        );
    }
}

fn preview(s: &str) -> String {
    if s.chars().count() > PREVIEW_CHARS {
        format!("{}...", s.chars().take(PREVIEW_CHARS).collect::<String>())
    } else {
        s.to_string()
    }
}
