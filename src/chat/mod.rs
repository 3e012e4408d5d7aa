//! Conversation state for the simulated chat page.
//!
//! The [`store::ChatStore`] holds every conversation in memory and drives
//! the fake assistant round trip; [`responder::CannedResponder`] and
//! [`clock::Clock`] are its injected collaborators, so the whole thing is
//! deterministic under test.

pub mod clock;
pub mod ids;
pub mod responder;
pub mod seed;
pub mod store;
pub mod types;

pub use clock::{Clock, SystemClock};
pub use ids::{ConversationId, MessageId};
pub use responder::CannedResponder;
pub use store::ChatStore;
pub use types::{Conversation, Message, Sender};
