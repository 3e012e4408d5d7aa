//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::chat::clock::{Clock, SystemClock};
use crate::chat::responder::CannedResponder;
use crate::chat::seed;
use crate::chat::store::ChatStore;
use crate::config::AppConfig;
use crate::dashboard::DashboardData;
use crate::site::LandingContent;

/// Shared application state.
pub struct AppState {
    /// The conversation store behind the chat page.
    pub store: Arc<ChatStore>,
    /// Fabricated dashboard data.
    pub dashboard: DashboardData,
    /// Landing page copy.
    pub landing: LandingContent,
}

impl AppState {
    /// Assemble the store and page data from configuration.
    #[must_use]
    pub fn new(config: &AppConfig) -> Arc<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let responder = Arc::new(CannedResponder::new(
            config.chat.responses.clone(),
            config.chat.base_delay(),
            config.chat.jitter(),
        ));
        let seeds = if config.chat.seed_demo_data {
            seed::demo_conversations(clock.as_ref())
        } else {
            Vec::new()
        };
        let store =
            ChatStore::with_conversations(seeds, config.chat.greeting.clone(), clock, responder);

        Arc::new(Self {
            store,
            dashboard: DashboardData::sample(),
            landing: LandingContent::sample(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_state_seeds_demo_conversations_by_default() {
        let state = AppState::new(&AppConfig::default());
        assert_eq!(state.store.conversations().await.len(), 6);
    }

    #[tokio::test]
    async fn test_state_without_demo_data_starts_fresh() {
        let mut config = AppConfig::default();
        config.chat.seed_demo_data = false;
        let state = AppState::new(&config);
        assert_eq!(state.store.conversations().await.len(), 1);
    }
}
