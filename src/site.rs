//! Marketing copy for the landing page.

use serde::{Deserialize, Serialize};

/// One feature highlight card.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeatureHighlight {
    /// Card title, e.g. "Lightning Fast".
    pub title: String,
    /// One-sentence pitch.
    pub description: String,
}

/// Everything the landing page renders.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LandingContent {
    /// Small badge above the headline.
    pub badge: String,
    /// Hero headline.
    pub headline: String,
    /// Hero subtitle paragraph.
    pub subtitle: String,
    /// Feature highlight cards.
    pub features: Vec<FeatureHighlight>,
}

impl LandingContent {
    /// The demo marketing copy.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            badge: "Powered by Advanced AI".to_string(),
            headline: "The Future of AI Analytics".to_string(),
            subtitle: "Transform your data into actionable insights with our cutting-edge AI \
                       dashboard. Experience the power of intelligent analytics and seamless \
                       user interaction."
                .to_string(),
            features: vec![
                FeatureHighlight {
                    title: "Lightning Fast".to_string(),
                    description: "Real-time analytics and instant insights powered by advanced \
                                  AI algorithms."
                        .to_string(),
                },
                FeatureHighlight {
                    title: "Secure & Private".to_string(),
                    description: "Enterprise-grade security with end-to-end encryption and \
                                  privacy protection."
                        .to_string(),
                },
                FeatureHighlight {
                    title: "Global Scale".to_string(),
                    description: "Built to scale globally with distributed infrastructure and \
                                  edge computing."
                        .to_string(),
                },
            ],
        }
    }
}
