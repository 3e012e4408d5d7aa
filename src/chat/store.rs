//! In-memory conversation store with a simulated assistant round trip.
//!
//! The store owns an ordered collection of conversations (most recently
//! created first), the current selection, and a single "composing" flag
//! that is set while a canned reply is pending. All mutation goes through
//! one async lock; the only suspension point is the randomized reply delay,
//! which runs as a spawned task keyed by the conversation it was sent from.
//!
//! Nothing here fails outward: empty input and unknown identifiers are
//! absorbed silently, matching the behavior the view layer expects.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{RwLock, watch};
use tokio::task::JoinHandle;
use tracing::debug;

use super::clock::Clock;
use super::ids::ConversationId;
use super::responder::CannedResponder;
use super::types::{Conversation, Message, Sender, TITLE_MAX_CHARS, derive_title};

/// The conversation store behind the chat page.
pub struct ChatStore {
    state: RwLock<StoreState>,
    clock: Arc<dyn Clock>,
    responder: Arc<CannedResponder>,
    greeting: String,
    /// Pending reply task per origin conversation. At most one entry exists
    /// at a time because sends are rejected while composing.
    pending: DashMap<ConversationId, JoinHandle<()>>,
    revision_tx: watch::Sender<u64>,
}

/// Mutable state guarded by the store lock.
struct StoreState {
    /// Insertion order, most recently created first.
    conversations: Vec<Conversation>,
    /// Always references an element of `conversations`.
    current: ConversationId,
    composing: bool,
}

impl StoreState {
    fn find_mut(&mut self, id: ConversationId) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|c| c.id == id)
    }
}

impl ChatStore {
    /// Create a store seeded with a single fresh conversation.
    #[must_use]
    pub fn new(
        greeting: impl Into<String>,
        clock: Arc<dyn Clock>,
        responder: Arc<CannedResponder>,
    ) -> Arc<Self> {
        Self::with_conversations(Vec::new(), greeting, clock, responder)
    }

    /// Create a store pre-seeded with the given conversations. The first one
    /// becomes current; an empty seed set gets a fresh conversation so the
    /// collection is never empty.
    #[must_use]
    pub fn with_conversations(
        seeds: Vec<Conversation>,
        greeting: impl Into<String>,
        clock: Arc<dyn Clock>,
        responder: Arc<CannedResponder>,
    ) -> Arc<Self> {
        let greeting = greeting.into();
        let mut conversations = seeds;
        let current = match conversations.first() {
            Some(first) => first.id,
            None => {
                let conv = Conversation::with_greeting(greeting.clone(), clock.now());
                let id = conv.id;
                conversations.push(conv);
                id
            }
        };

        let (revision_tx, _) = watch::channel(0);
        Arc::new(Self {
            state: RwLock::new(StoreState {
                conversations,
                current,
                composing: false,
            }),
            clock,
            responder,
            greeting,
            pending: DashMap::new(),
            revision_tx,
        })
    }

    /// Subscribe to store changes. The receiver ticks on every mutation;
    /// observers re-read the snapshots they care about.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision_tx.subscribe()
    }

    /// Snapshot of all conversations in store order.
    pub async fn conversations(&self) -> Vec<Conversation> {
        self.state.read().await.conversations.clone()
    }

    /// Identifier of the current conversation.
    pub async fn current_id(&self) -> ConversationId {
        self.state.read().await.current
    }

    /// Snapshot of the current conversation.
    pub async fn current_conversation(&self) -> Option<Conversation> {
        let state = self.state.read().await;
        state
            .conversations
            .iter()
            .find(|c| c.id == state.current)
            .cloned()
    }

    /// Snapshot of a single conversation by id.
    pub async fn conversation(&self, id: ConversationId) -> Option<Conversation> {
        let state = self.state.read().await;
        state.conversations.iter().find(|c| c.id == id).cloned()
    }

    /// Whether a simulated reply is pending.
    pub async fn is_composing(&self) -> bool {
        self.state.read().await.composing
    }

    /// Create a new conversation seeded with the assistant greeting, insert
    /// it at the front of the collection, and make it current.
    pub async fn create_conversation(&self) -> Conversation {
        let conv = Conversation::with_greeting(self.greeting.clone(), self.clock.now());
        let snapshot = conv.clone();
        {
            let mut state = self.state.write().await;
            state.current = conv.id;
            state.conversations.insert(0, conv);
        }
        debug!(id = %snapshot.id, "created conversation");
        self.bump();
        snapshot
    }

    /// Remove a conversation. Unknown ids are ignored. If the removed
    /// conversation was current, selection moves to the first remaining
    /// conversation; if none remain a fresh one is synthesized so the
    /// collection never ends up empty. A reply pending for the removed
    /// conversation is cancelled.
    pub async fn delete_conversation(&self, id: ConversationId) {
        let mut cancelled = false;
        if let Some((_, handle)) = self.pending.remove(&id) {
            handle.abort();
            cancelled = true;
        }

        let mut state = self.state.write().await;
        let Some(pos) = state.conversations.iter().position(|c| c.id == id) else {
            return;
        };
        state.conversations.remove(pos);
        if cancelled {
            state.composing = false;
        }
        if state.current == id {
            match state.conversations.first() {
                Some(first) => state.current = first.id,
                None => {
                    let conv = Conversation::with_greeting(self.greeting.clone(), self.clock.now());
                    state.current = conv.id;
                    state.conversations.insert(0, conv);
                }
            }
        }
        drop(state);
        debug!(%id, "deleted conversation");
        self.bump();
    }

    /// Make the given conversation current. Unknown ids are ignored.
    pub async fn select_conversation(&self, id: ConversationId) {
        let mut state = self.state.write().await;
        if state.conversations.iter().any(|c| c.id == id) {
            state.current = id;
            drop(state);
            self.bump();
        }
    }

    /// Send a user message into the current conversation and schedule the
    /// simulated assistant reply.
    ///
    /// Empty or whitespace-only text is ignored, as is a send while a reply
    /// is already composing; neither is surfaced as an error. On the first
    /// user message of a placeholder-titled conversation the title becomes
    /// the truncated message text.
    ///
    /// The reply lands in the conversation the message was sent from, even
    /// if the selection changes while the delay is running.
    pub async fn send_user_message(self: &Arc<Self>, text: &str) {
        if text.trim().is_empty() {
            return;
        }

        let origin = {
            let mut state = self.state.write().await;
            if state.composing {
                debug!("ignoring send while a reply is composing");
                return;
            }
            let now = self.clock.now();
            let current = state.current;
            let Some(conv) = state.find_mut(current) else {
                return;
            };
            if conv.messages.len() == 1 && conv.has_placeholder_title() {
                conv.title = derive_title(text, TITLE_MAX_CHARS);
            }
            conv.push(Message::new(Sender::User, text, now));
            state.composing = true;
            current
        };
        self.bump();

        let plan = self.responder.plan();
        let store = Arc::clone(self);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(plan.delay).await;
            store.complete_reply(origin, plan.content).await;
        });
        self.pending.insert(origin, handle);
    }

    /// Conversations whose title contains `query` case-insensitively, in
    /// store order. An empty query returns everything.
    pub async fn filter_conversations(&self, query: &str) -> Vec<Conversation> {
        let needle = query.to_lowercase();
        self.state
            .read()
            .await
            .conversations
            .iter()
            .filter(|c| c.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Append the canned reply to its origin conversation and leave the
    /// composing state. If the origin was deleted in the meantime the reply
    /// is dropped silently.
    async fn complete_reply(&self, origin: ConversationId, content: String) {
        self.pending.remove(&origin);

        let mut state = self.state.write().await;
        let now = self.clock.now();
        match state.find_mut(origin) {
            Some(conv) => conv.push(Message::new(Sender::Assistant, content, now)),
            None => debug!(%origin, "dropping reply for deleted conversation"),
        }
        state.composing = false;
        drop(state);
        self.bump();
    }

    fn bump(&self) {
        self.revision_tx.send_modify(|rev| *rev += 1);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::super::clock::SystemClock;
    use super::*;

    const GREETING: &str = "Hello! I'm your AI assistant. How can I help you today?";

    fn responder(base_ms: u64, jitter_ms: u64) -> Arc<CannedResponder> {
        Arc::new(CannedResponder::seeded(
            vec!["canned reply".to_string()],
            Duration::from_millis(base_ms),
            Duration::from_millis(jitter_ms),
            1,
        ))
    }

    fn store() -> Arc<ChatStore> {
        ChatStore::new(GREETING, Arc::new(SystemClock), responder(2000, 1000))
    }

    async fn assert_selection_valid(store: &Arc<ChatStore>) {
        let current = store.current_id().await;
        let conversations = store.conversations().await;
        assert!(!conversations.is_empty());
        assert!(conversations.iter().any(|c| c.id == current));
    }

    #[tokio::test]
    async fn test_new_store_has_one_seeded_conversation() {
        let store = store();
        let conversations = store.conversations().await;
        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].title, "New Chat");
        assert_eq!(conversations[0].messages.len(), 1);
        assert_eq!(conversations[0].messages[0].sender, Sender::Assistant);
        assert_selection_valid(&store).await;
    }

    #[tokio::test]
    async fn test_create_inserts_at_front_and_selects() {
        let store = store();
        let first = store.current_id().await;
        let created = store.create_conversation().await;

        assert_eq!(store.conversations().await.len(), 2);
        assert_eq!(store.current_id().await, created.id);
        assert_eq!(store.conversations().await[0].id, created.id);
        assert_ne!(created.id, first);
    }

    #[tokio::test]
    async fn test_delete_non_current_keeps_selection() {
        let store = store();
        let old = store.current_id().await;
        let created = store.create_conversation().await;

        store.delete_conversation(old).await;
        assert_eq!(store.conversations().await.len(), 1);
        assert_eq!(store.current_id().await, created.id);
    }

    #[tokio::test]
    async fn test_delete_current_selects_first_remaining() {
        let store = store();
        let created = store.create_conversation().await;
        let other = store.conversations().await[1].id;

        store.delete_conversation(created.id).await;
        assert_eq!(store.current_id().await, other);
        assert_selection_valid(&store).await;
    }

    #[tokio::test]
    async fn test_delete_last_synthesizes_replacement() {
        let store = store();
        let only = store.current_id().await;

        store.delete_conversation(only).await;
        let conversations = store.conversations().await;
        assert_eq!(conversations.len(), 1);
        assert_ne!(conversations[0].id, only);
        assert_selection_valid(&store).await;
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_a_no_op() {
        let store = store();
        let before = store.conversations().await.len();
        store.delete_conversation(ConversationId::new()).await;
        assert_eq!(store.conversations().await.len(), before);
    }

    #[tokio::test]
    async fn test_select_unknown_id_is_a_no_op() {
        let store = store();
        let current = store.current_id().await;
        store.select_conversation(ConversationId::new()).await;
        assert_eq!(store.current_id().await, current);
    }

    #[tokio::test]
    async fn test_selection_invariant_under_create_delete_churn() {
        let store = store();
        for _ in 0..5 {
            store.create_conversation().await;
            assert_selection_valid(&store).await;
        }
        loop {
            let current = store.current_id().await;
            store.delete_conversation(current).await;
            assert_selection_valid(&store).await;
            if store.conversations().await.len() == 1 {
                break;
            }
        }
    }

    #[tokio::test]
    async fn test_empty_and_whitespace_sends_are_ignored() {
        let store = store();
        store.send_user_message("").await;
        store.send_user_message("   ").await;
        store.send_user_message("\n\t").await;

        let current = store.current_conversation().await;
        assert_eq!(current.map(|c| c.messages.len()), Some(1));
        assert!(!store.is_composing().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_message_sets_title_once() {
        let store = store();
        store.send_user_message("How do indexes work?").await;
        let current = store.current_conversation().await;
        assert_eq!(current.map(|c| c.title), Some("How do indexes work?".to_string()));

        tokio::time::sleep(Duration::from_millis(3100)).await;
        store.send_user_message("And what about B-trees?").await;
        let current = store.current_conversation().await;
        assert_eq!(current.map(|c| c.title), Some("How do indexes work?".to_string()));
    }

    #[tokio::test]
    async fn test_long_first_message_is_truncated_with_ellipsis() {
        let store = store();
        let text = "x".repeat(60);
        store.send_user_message(&text).await;

        let title = store.current_conversation().await.map(|c| c.title);
        let mut expected = "x".repeat(50);
        expected.push_str("...");
        assert_eq!(title, Some(expected));
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_round_trip() {
        let store = store();
        store.send_user_message("Hello").await;

        assert!(store.is_composing().await);
        let current = store.current_conversation().await;
        assert_eq!(current.map(|c| c.messages.len()), Some(2));

        tokio::time::sleep(Duration::from_millis(3100)).await;

        assert!(!store.is_composing().await);
        let messages = store
            .current_conversation()
            .await
            .map(|c| c.messages)
            .unwrap_or_default();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages.last().map(|m| m.sender), Some(Sender::Assistant));
        assert_eq!(
            messages.last().map(|m| m.content.clone()),
            Some("canned reply".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_while_composing_is_ignored() {
        let store = store();
        store.send_user_message("first").await;
        store.send_user_message("second").await;

        let current = store.current_conversation().await;
        // Greeting plus the first user message only.
        assert_eq!(current.map(|c| c.messages.len()), Some(2));

        tokio::time::sleep(Duration::from_millis(3100)).await;
        let current = store.current_conversation().await;
        assert_eq!(current.map(|c| c.messages.len()), Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_lands_in_origin_after_selection_switch() {
        let store = store();
        let origin = store.current_id().await;
        store.send_user_message("Hello").await;

        let other = store.create_conversation().await;
        assert_eq!(store.current_id().await, other.id);

        tokio::time::sleep(Duration::from_millis(3100)).await;

        let origin_messages = store
            .conversation(origin)
            .await
            .map(|c| c.messages.len());
        assert_eq!(origin_messages, Some(3));
        let other_messages = store.conversation(other.id).await.map(|c| c.messages.len());
        assert_eq!(other_messages, Some(1));
        assert!(!store.is_composing().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deleting_origin_cancels_pending_reply() {
        let store = store();
        let origin = store.current_id().await;
        store.send_user_message("Hello").await;
        assert!(store.is_composing().await);

        store.delete_conversation(origin).await;
        assert!(!store.is_composing().await);

        tokio::time::sleep(Duration::from_millis(3100)).await;

        // The synthesized replacement never receives the orphaned reply.
        let conversations = store.conversations().await;
        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].messages.len(), 1);
    }

    #[tokio::test]
    async fn test_late_reply_for_missing_conversation_is_dropped() {
        let store = store();
        store
            .complete_reply(ConversationId::new(), "orphan".to_string())
            .await;

        let conversations = store.conversations().await;
        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].messages.len(), 1);
        assert!(!store.is_composing().await);
    }

    #[tokio::test]
    async fn test_filter_is_case_insensitive() {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let mut seeds = vec![
            Conversation::with_greeting(GREETING, clock.now()),
            Conversation::with_greeting(GREETING, clock.now()),
            Conversation::with_greeting(GREETING, clock.now()),
        ];
        seeds[0].title = "Database Optimization Techniques".to_string();
        seeds[1].title = "database basics".to_string();
        seeds[2].title = "CSS Grid".to_string();
        let store = ChatStore::with_conversations(seeds, GREETING, clock, responder(2000, 1000));

        let hits = store.filter_conversations("data").await;
        let titles: Vec<&str> = hits.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Database Optimization Techniques", "database basics"]
        );

        assert_eq!(store.filter_conversations("").await.len(), 3);
        assert!(store.filter_conversations("grid").await.len() == 1);
        assert!(store.filter_conversations("nomatch").await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscription_ticks_on_mutation() {
        let store = store();
        let mut rx = store.subscribe();
        let before = *rx.borrow_and_update();

        store.create_conversation().await;
        assert!(rx.has_changed().unwrap_or(false));
        let _ = rx.borrow_and_update();
        assert!(*store.subscribe().borrow() > before);
    }
}
