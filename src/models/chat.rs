// file: src/models/chat.rs
// description: chat transcript entries and assistant replies

use crate::models::Visualization;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Decoded assistant answer: display text plus an optional chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visualization: Option<Visualization>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visualization: Option<Visualization>,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            content: content.into(),
            visualization: None,
            created_at: Utc::now(),
        }
    }

    pub fn assistant(reply: &AssistantReply) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            content: reply.text.clone(),
            visualization: reply.visualization.clone(),
            created_at: Utc::now(),
        }
    }
}
