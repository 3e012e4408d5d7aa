//! Configuration for the demo application.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chat::responder::{DEFAULT_BASE_DELAY_MS, DEFAULT_JITTER_MS, default_responses};
use crate::chat::seed;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid JSON for [`AppConfig`].
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level application configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Chat simulation settings.
    pub chat: ChatConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            chat: ChatConfig::default(),
        }
    }
}

impl AppConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Set the server port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

/// Settings for the conversation store and the simulated reply.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Assistant greeting seeded into every new conversation.
    pub greeting: String,
    /// Base reply delay in milliseconds.
    pub reply_base_delay_ms: u64,
    /// Upper bound of the uniform jitter added to the base delay, in
    /// milliseconds.
    pub reply_jitter_ms: u64,
    /// Pool of canned assistant replies. An empty pool falls back to the
    /// stock set.
    pub responses: Vec<String>,
    /// Whether to pre-seed the store with the demo conversation set.
    pub seed_demo_data: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: seed::GREETING.to_string(),
            reply_base_delay_ms: DEFAULT_BASE_DELAY_MS,
            reply_jitter_ms: DEFAULT_JITTER_MS,
            responses: default_responses(),
            seed_demo_data: true,
        }
    }
}

impl ChatConfig {
    /// Set the reply delay bounds.
    #[must_use]
    pub const fn with_reply_delay(mut self, base_ms: u64, jitter_ms: u64) -> Self {
        self.reply_base_delay_ms = base_ms;
        self.reply_jitter_ms = jitter_ms;
        self
    }

    /// Replace the canned response pool.
    #[must_use]
    pub fn with_responses(mut self, responses: Vec<String>) -> Self {
        self.responses = responses;
        self
    }

    /// Disable the demo conversation seed.
    #[must_use]
    pub const fn without_demo_data(mut self) -> Self {
        self.seed_demo_data = false;
        self
    }

    /// Base reply delay as a [`Duration`].
    #[must_use]
    pub const fn base_delay(&self) -> Duration {
        Duration::from_millis(self.reply_base_delay_ms)
    }

    /// Reply jitter as a [`Duration`].
    #[must_use]
    pub const fn jitter(&self) -> Duration {
        Duration::from_millis(self.reply_jitter_ms)
    }
}
