//! Chat transcript for interactive assistant front ends.
//!
//! # Invariants
//! - A new session starts with the assistant welcome message.
//! - Blank input never changes the transcript.

use super::rules::respond;
use crate::model::paper::PaperRecord;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed pause interactive callers show before an answer appears.
pub const THINKING_DELAY: Duration = Duration::from_millis(800);

pub const WELCOME_MESSAGE: &str = "Hello! I'm your Space Biology Research Assistant. I can help you explore research papers about microgravity, space adaptation, and life sciences in space. What would you like to know?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Ordered user/assistant exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: ChatRole::Assistant,
                content: WELCOME_MESSAGE.to_string(),
            }],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Records `input` and the rule-table answer; returns the answer.
    ///
    /// Returns `None` without touching the transcript when `input` is blank.
    pub fn ask(&mut self, input: &str, papers: &[PaperRecord]) -> Option<&ChatMessage> {
        if input.trim().is_empty() {
            return None;
        }

        self.messages.push(ChatMessage {
            role: ChatRole::User,
            content: input.to_string(),
        });
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            content: respond(input, papers),
        });
        self.messages.last()
    }
}
