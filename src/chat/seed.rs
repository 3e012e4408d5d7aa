//! Demo conversation set shipped with the chat page.
//!
//! These are the fabricated threads a fresh session starts with, so the
//! sidebar and search have something to show before the user types anything.

use chrono::Duration;

use super::clock::Clock;
use super::ids::ConversationId;
use super::types::{Conversation, Message, Sender};

/// Greeting inserted as the first message of every new conversation.
pub const GREETING: &str = "Hello! I'm your AI assistant. How can I help you today?";

/// Longer-form greeting used by the oldest demo thread.
const FULL_GREETING: &str = "Hello! I'm your AI assistant. I'm here to help you with questions, \
provide information, assist with tasks, and engage in meaningful conversations. How can I assist \
you today?";

struct SeedMessage {
    sender: Sender,
    content: &'static str,
    /// Minutes before "now" the message was written.
    minutes_ago: i64,
}

fn build(clock: &dyn Clock, title: &str, messages: &[SeedMessage]) -> Conversation {
    let now = clock.now();
    let mut conv = Conversation {
        id: ConversationId::new(),
        title: title.to_string(),
        messages: Vec::with_capacity(messages.len()),
        last_updated: now,
    };
    for seed in messages {
        let at = now - Duration::minutes(seed.minutes_ago);
        conv.push(Message::new(seed.sender, seed.content, at));
    }
    conv
}

/// The six conversations a demo session is pre-seeded with, most recent
/// first. The first one is selected at startup.
#[must_use]
pub fn demo_conversations(clock: &dyn Clock) -> Vec<Conversation> {
    vec![
        build(
            clock,
            "Machine Learning vs AI Explanation",
            &[
                SeedMessage {
                    sender: Sender::Assistant,
                    content: FULL_GREETING,
                    minutes_ago: 5,
                },
                SeedMessage {
                    sender: Sender::User,
                    content: "Can you help me understand the difference between machine learning and artificial intelligence?",
                    minutes_ago: 4,
                },
                SeedMessage {
                    sender: Sender::Assistant,
                    content: "Great question! I'd be happy to explain the difference between AI and machine learning.\n\n**Artificial Intelligence (AI)** is the broader concept of creating machines that can perform tasks that typically require human intelligence. This includes reasoning, learning, perception, and decision-making.\n\n**Machine Learning (ML)** is actually a subset of AI. It's a specific approach where we train algorithms on data so they can learn patterns and make predictions or decisions without being explicitly programmed for every scenario.",
                    minutes_ago: 3,
                },
            ],
        ),
        build(
            clock,
            "React Component Best Practices",
            &[
                SeedMessage {
                    sender: Sender::User,
                    content: "What are the best practices for writing React components?",
                    minutes_ago: 24 * 60,
                },
                SeedMessage {
                    sender: Sender::Assistant,
                    content: "Here are some key React component best practices:\n\n**1. Keep Components Small and Focused**\n- Single responsibility principle\n- Easier to test and maintain\n\n**2. Use Functional Components with Hooks**\n- More concise and easier to understand\n- Better performance with React 18+\n\n**3. Proper State Management**\n- Use useState for local state\n- Consider useReducer for complex state logic\n- Lift state up when needed",
                    minutes_ago: 24 * 60 - 2,
                },
            ],
        ),
        build(
            clock,
            "JavaScript Array Methods Guide",
            &[
                SeedMessage {
                    sender: Sender::User,
                    content: "Can you explain the most useful JavaScript array methods?",
                    minutes_ago: 48 * 60,
                },
                SeedMessage {
                    sender: Sender::Assistant,
                    content: "Here are the most essential JavaScript array methods:\n\n**Transformation Methods:**\n• `map()` - Transform each element\n• `filter()` - Create new array with elements that pass a test\n• `reduce()` - Reduce array to single value\n\n**Search Methods:**\n• `find()` - Find first element that matches\n• `findIndex()` - Find index of first match\n• `includes()` - Check if array contains value",
                    minutes_ago: 48 * 60 - 2,
                },
            ],
        ),
        build(
            clock,
            "CSS Grid vs Flexbox Comparison",
            &[
                SeedMessage {
                    sender: Sender::User,
                    content: "When should I use CSS Grid vs Flexbox?",
                    minutes_ago: 72 * 60,
                },
                SeedMessage {
                    sender: Sender::Assistant,
                    content: "Great question! Here's when to use each:\n\n**Use Flexbox for:**\n- One-dimensional layouts (row or column)\n- Component-level layout\n- Centering items\n- Distributing space between items\n\n**Use CSS Grid for:**\n- Two-dimensional layouts (rows AND columns)\n- Page-level layout\n- Complex grid systems\n- Overlapping elements",
                    minutes_ago: 72 * 60 - 2,
                },
            ],
        ),
        build(
            clock,
            "API Design Best Practices",
            &[SeedMessage {
                sender: Sender::User,
                content: "What are the key principles for designing good REST APIs?",
                minutes_ago: 96 * 60,
            }],
        ),
        build(
            clock,
            "Database Optimization Techniques",
            &[SeedMessage {
                sender: Sender::User,
                content: "How can I optimize database performance?",
                minutes_ago: 120 * 60,
            }],
        ),
    ]
}
