// Command configuration

use tracing::warn;

/// Default timeouts used when callers do not pass one
#[derive(Debug, Clone)]
pub struct CommandConfig {
    /// Shell command timeout in milliseconds (default: 1000)
    pub command_timeout_ms: u64,
    /// Code run timeout in seconds (default: 300)
    pub code_timeout_secs: u64,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            command_timeout_ms: 1000,
            code_timeout_secs: 300,
        }
    }
}

/// Parse an environment variable, logging a warning if the value is present but invalid.
fn parse_env_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(v) => match v.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(var = name, value = %v, "Invalid env var value, using default");
                default
            }
        },
        Err(_) => default,
    }
}

impl CommandConfig {
    /// Load from environment variables (and `.env` if present)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = CommandConfig::default();
        Self {
            command_timeout_ms: parse_env_var(
                "SANDCALL_COMMAND_TIMEOUT_MS",
                defaults.command_timeout_ms,
            ),
            code_timeout_secs: parse_env_var(
                "SANDCALL_CODE_TIMEOUT_SECS",
                defaults.code_timeout_secs,
            ),
        }
    }
}
