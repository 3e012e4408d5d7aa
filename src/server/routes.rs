//! HTTP route handlers for the `HelloAI` demo API.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;
use uuid::Uuid;

use crate::chat::ids::ConversationId;
use crate::chat::types::Conversation;

use super::state::AppState;

/// Create the API router with all routes.
#[must_use]
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/conversations",
            get(list_conversations).post(create_conversation),
        )
        .route(
            "/api/conversations/{id}",
            get(get_conversation).delete(delete_conversation),
        )
        .route("/api/conversations/{id}/select", post(select_conversation))
        .route("/api/chat/state", get(chat_state))
        .route("/api/chat/messages", post(send_message))
        .route("/api/dashboard", get(dashboard_data))
        .route("/api/landing", get(landing_content))
        .nest_service("/", ServeDir::new("static").fallback(ServeDir::new("static")))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "helloai",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Sidebar row for a conversation.
#[derive(Debug, Serialize)]
pub struct ConversationSummaryDto {
    /// Conversation identifier.
    pub id: ConversationId,
    /// Display title.
    pub title: String,
    /// Timestamp of the most recent message.
    pub last_updated: DateTime<Utc>,
    /// Number of messages in the thread.
    pub message_count: usize,
}

impl From<&Conversation> for ConversationSummaryDto {
    fn from(conv: &Conversation) -> Self {
        Self {
            id: conv.id,
            title: conv.title.clone(),
            last_updated: conv.last_updated,
            message_count: conv.messages.len(),
        }
    }
}

/// Query parameters for the conversation list.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive title filter; absent or empty matches everything.
    pub q: Option<String>,
}

/// List conversations, optionally filtered by title substring.
async fn list_conversations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<ConversationSummaryDto>> {
    let hits = state
        .store
        .filter_conversations(query.q.as_deref().unwrap_or(""))
        .await;
    Json(hits.iter().map(ConversationSummaryDto::from).collect())
}

/// Create a new conversation and make it current.
async fn create_conversation(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ConversationSummaryDto>) {
    let conv = state.store.create_conversation().await;
    (StatusCode::CREATED, Json(ConversationSummaryDto::from(&conv)))
}

/// Fetch a full conversation with its messages.
async fn get_conversation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Conversation>, StatusCode> {
    state
        .store
        .conversation(ConversationId::from_uuid(id))
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Delete a conversation. Unknown ids are ignored, mirroring the store.
async fn delete_conversation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    state
        .store
        .delete_conversation(ConversationId::from_uuid(id))
        .await;
    StatusCode::NO_CONTENT
}

/// Make a conversation current. Unknown ids are ignored.
async fn select_conversation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    state
        .store
        .select_conversation(ConversationId::from_uuid(id))
        .await;
    StatusCode::NO_CONTENT
}

/// Current selection and composing flag.
#[derive(Debug, Serialize)]
pub struct ChatStateDto {
    /// Identifier of the current conversation.
    pub current_id: ConversationId,
    /// Whether a simulated reply is pending.
    pub composing: bool,
}

/// Report the store's observable chat state.
async fn chat_state(State(state): State<Arc<AppState>>) -> Json<ChatStateDto> {
    Json(ChatStateDto {
        current_id: state.store.current_id().await,
        composing: state.store.is_composing().await,
    })
}

/// Body for sending a user message.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    /// Message text. Empty or whitespace-only content is silently dropped.
    pub content: String,
}

/// Send a user message into the current conversation. Always accepted; the
/// simulated reply lands asynchronously.
async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SendMessageRequest>,
) -> StatusCode {
    state.store.send_user_message(&request.content).await;
    StatusCode::ACCEPTED
}

/// Serve the fabricated dashboard data.
async fn dashboard_data(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.dashboard.clone())
}

/// Serve the landing page copy.
async fn landing_content(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.landing.clone())
}
