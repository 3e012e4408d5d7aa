//! Startup helpers for the `HelloAI` demo server.

use std::process::ExitCode;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::server::{self, AppState};

/// Environment variable naming an optional JSON config file.
const CONFIG_ENV: &str = "HELLOAI_CONFIG";

/// Environment variable overriding the server port.
const PORT_ENV: &str = "HELLOAI_PORT";

/// Run the server (used by the `helloai-server` binary).
///
/// # Returns
/// `ExitCode::SUCCESS` on graceful shutdown, `1` on failure.
#[must_use]
pub fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting HelloAI v{}", env!("CARGO_PKG_VERSION"));

    let config = match load_config() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to load config: {e}");
            return ExitCode::from(1);
        }
    };

    let state = AppState::new(&config);
    let port = get_port(&config);

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create runtime: {e}");
            return ExitCode::from(1);
        }
    };

    if let Err(e) = rt.block_on(server::run_server(state, port)) {
        tracing::error!("Server error: {e}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

/// Initialize application state without starting the server.
#[must_use]
pub fn initialize(config: &AppConfig) -> Arc<AppState> {
    AppState::new(config)
}

/// Load configuration, preferring the file named by `HELLOAI_CONFIG`.
///
/// # Errors
/// Returns an error if the named file cannot be read or parsed. A missing
/// environment variable falls back to defaults.
pub fn load_config() -> Result<AppConfig, crate::config::ConfigError> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => {
            tracing::info!("Loading config from {path}");
            AppConfig::load(path)
        }
        Err(_) => Ok(AppConfig::default()),
    }
}

/// Get the configured server port, with `HELLOAI_PORT` taking precedence.
#[must_use]
pub fn get_port(config: &AppConfig) -> u16 {
    std::env::var(PORT_ENV)
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(config.port)
}
