//! Canned assistant replies and the simulated "thinking" delay.
//!
//! There is no model behind the chat: a reply is one of a fixed pool of
//! texts chosen uniformly at random, delivered after a randomized delay
//! (base plus uniform jitter). Both draws come from a single seedable RNG
//! so tests can make the whole round trip deterministic.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default base delay before a reply lands, in milliseconds.
pub const DEFAULT_BASE_DELAY_MS: u64 = 2000;

/// Default upper bound of the uniform jitter added to the base delay.
pub const DEFAULT_JITTER_MS: u64 = 1000;

/// A planned reply: what to say and how long to pretend to think first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplyPlan {
    /// The canned response text.
    pub content: String,
    /// Delay before the reply is appended.
    pub delay: Duration,
}

/// Picks canned replies and delays from an owned RNG.
pub struct CannedResponder {
    responses: Vec<String>,
    base_delay: Duration,
    jitter: Duration,
    rng: Mutex<StdRng>,
}

impl CannedResponder {
    /// Create a responder with an entropy-seeded RNG.
    #[must_use]
    pub fn new(responses: Vec<String>, base_delay: Duration, jitter: Duration) -> Self {
        Self::with_rng(responses, base_delay, jitter, StdRng::from_entropy())
    }

    /// Create a responder with a fixed seed. Intended for tests.
    #[must_use]
    pub fn seeded(responses: Vec<String>, base_delay: Duration, jitter: Duration, seed: u64) -> Self {
        Self::with_rng(responses, base_delay, jitter, StdRng::seed_from_u64(seed))
    }

    fn with_rng(responses: Vec<String>, base_delay: Duration, jitter: Duration, rng: StdRng) -> Self {
        let responses = if responses.is_empty() {
            default_responses()
        } else {
            responses
        };
        Self {
            responses,
            base_delay,
            jitter,
            rng: Mutex::new(rng),
        }
    }

    /// Draw the next reply and its delay.
    ///
    /// The delay is uniform in `[base_delay, base_delay + jitter]`.
    #[must_use]
    pub fn plan(&self) -> ReplyPlan {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let idx = rng.gen_range(0..self.responses.len());
        let jitter_bound = u64::try_from(self.jitter.as_millis()).unwrap_or(u64::MAX);
        let jitter_ms = rng.gen_range(0..=jitter_bound);
        ReplyPlan {
            content: self.responses[idx].clone(),
            delay: self.base_delay + Duration::from_millis(jitter_ms),
        }
    }
}

/// The stock reply pool shipped with the demo.
#[must_use]
pub fn default_responses() -> Vec<String> {
    vec![
        "That's an excellent question! Let me break this down for you step by step.\n\nFirst, it's important to understand that this topic has several key aspects to consider. The main points I'd highlight are:\n\n1. **Context matters** - The situation you're describing depends heavily on the specific circumstances\n2. **Multiple approaches** - There are usually several ways to tackle this kind of challenge\n3. **Best practices** - Industry standards suggest following certain guidelines\n\nWould you like me to elaborate on any of these points?".to_string(),
        "I understand what you're looking for! This is actually a common scenario that many people encounter.\n\nHere's my recommended approach:\n\n**Step 1:** Start by gathering all the relevant information\n**Step 2:** Analyze the key factors that might influence your decision\n**Step 3:** Consider both short-term and long-term implications\n**Step 4:** Make a decision based on your priorities and constraints\n\nThe key is to be systematic about it. Would you like me to help you work through any specific part of this process?".to_string(),
        "Great point! You've touched on something really important here.\n\nFrom my analysis, there are a few different perspectives to consider:\n\n• **Technical perspective:** The implementation details matter significantly\n• **User experience perspective:** How this affects the end user is crucial\n• **Business perspective:** The cost-benefit analysis is important\n\nEach of these viewpoints might lead to different conclusions, which is why it's valuable to consider them all. What's your primary concern or goal in this situation?".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<String> {
        vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()]
    }

    #[test]
    fn test_plan_picks_from_pool() {
        let responder = CannedResponder::seeded(
            pool(),
            Duration::from_millis(2000),
            Duration::from_millis(1000),
            7,
        );
        for _ in 0..20 {
            let plan = responder.plan();
            assert!(pool().contains(&plan.content));
        }
    }

    #[test]
    fn test_delay_stays_within_bounds() {
        let base = Duration::from_millis(2000);
        let jitter = Duration::from_millis(1000);
        let responder = CannedResponder::seeded(pool(), base, jitter, 42);
        for _ in 0..100 {
            let plan = responder.plan();
            assert!(plan.delay >= base);
            assert!(plan.delay <= base + jitter);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = CannedResponder::seeded(pool(), Duration::ZERO, Duration::from_millis(10), 99);
        let b = CannedResponder::seeded(pool(), Duration::ZERO, Duration::from_millis(10), 99);
        for _ in 0..10 {
            assert_eq!(a.plan(), b.plan());
        }
    }

    #[test]
    fn test_empty_pool_falls_back_to_stock_replies() {
        let responder = CannedResponder::seeded(Vec::new(), Duration::ZERO, Duration::ZERO, 1);
        let plan = responder.plan();
        assert!(default_responses().contains(&plan.content));
    }
}
