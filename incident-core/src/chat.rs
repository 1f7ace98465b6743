//! Assistant conversation state and the saved-history list.
//!
//! [`ChatSession`] owns the open conversation plus every saved history; the UI
//! mirrors it into a signal and persists [`ChatSession::histories_json`] after
//! each mutation.

use crate::error::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const GREETING: &str =
    "Hello! I'm your AI assistant for emergency response guidance. How can I help you today?";
pub const NO_RESPONSE: &str = "No response received.";
pub const REQUEST_FAILED: &str = "Failed to get response from AI.";
pub const UNTITLED: &str = "New Chat";
pub const DEFAULT_CHAT_ID: &str = "default";

const TITLE_CHARS: usize = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u32,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatHistory {
    pub id: String,
    pub title: String,
    pub timestamp: DateTime<Utc>,
    pub messages: Vec<ChatMessage>,
}

/// First user message cut to 30 characters, or "New Chat".
pub fn chat_title(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .find(|m| m.role == ChatRole::User)
        .map(|m| m.content.chars().take(TITLE_CHARS).collect())
        .unwrap_or_else(|| UNTITLED.to_string())
}

pub fn new_chat_id(now: DateTime<Utc>) -> String {
    format!("chat_{}", now.timestamp_millis())
}

/// Reply text for a generate-response outcome.
pub fn reply_text(outcome: Result<Option<String>, impl std::fmt::Display>) -> String {
    match outcome {
        Ok(Some(text)) if !text.is_empty() => text,
        Ok(_) => NO_RESPONSE.to_string(),
        Err(e) => {
            log::warn!("assistant request failed: {e}");
            REQUEST_FAILED.to_string()
        }
    }
}

pub fn decode_histories(raw: &str) -> Result<Vec<ChatHistory>, CoreError> {
    Ok(serde_json::from_str(raw)?)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatSession {
    pub current_id: String,
    pub messages: Vec<ChatMessage>,
    pub histories: Vec<ChatHistory>,
}

impl ChatSession {
    pub fn new(histories: Vec<ChatHistory>, now: DateTime<Utc>) -> Self {
        Self {
            current_id: DEFAULT_CHAT_ID.to_string(),
            messages: greeting(now),
            histories,
        }
    }

    /// Restores from the stored JSON list; unreadable storage starts empty.
    pub fn restore(raw: Option<&str>, now: DateTime<Utc>) -> Self {
        let histories = match raw.map(decode_histories) {
            Some(Ok(h)) => h,
            Some(Err(e)) => {
                log::warn!("discarding unreadable chat histories: {e}");
                Vec::new()
            }
            None => Vec::new(),
        };
        Self::new(histories, now)
    }

    pub fn histories_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(&self.histories)?)
    }

    /// Appends the user's prompt. Blank input is ignored and returns `None`.
    pub fn push_user(&mut self, content: &str, now: DateTime<Utc>) -> Option<String> {
        let prompt = content.trim();
        if prompt.is_empty() {
            return None;
        }
        self.push(ChatRole::User, prompt.to_string(), now);
        Some(prompt.to_string())
    }

    /// Appends the assistant reply and saves the conversation.
    pub fn push_assistant(&mut self, content: String, now: DateTime<Utc>) {
        self.push(ChatRole::Assistant, content, now);
        self.save(now);
    }

    fn push(&mut self, role: ChatRole, content: String, now: DateTime<Utc>) {
        let id = self.messages.len() as u32 + 1;
        self.messages.push(ChatMessage {
            id,
            role,
            content,
            timestamp: now,
        });
    }

    /// Upserts the open conversation into the history list. A chat holding
    /// only the greeting is not saved. Returns whether anything changed.
    pub fn save(&mut self, now: DateTime<Utc>) -> bool {
        if self.messages.len() <= 1 {
            return false;
        }
        let entry = ChatHistory {
            id: self.current_id.clone(),
            title: chat_title(&self.messages),
            timestamp: now,
            messages: self.messages.clone(),
        };
        match self.histories.iter_mut().find(|h| h.id == entry.id) {
            Some(existing) => *existing = entry,
            None => self.histories.push(entry),
        }
        true
    }

    pub fn load(&mut self, id: &str, now: DateTime<Utc>) -> bool {
        self.save(now);
        let Some(chat) = self.histories.iter().find(|h| h.id == id) else {
            return false;
        };
        self.current_id = chat.id.clone();
        self.messages = chat.messages.clone();
        true
    }

    pub fn start_new(&mut self, now: DateTime<Utc>) {
        self.save(now);
        self.current_id = new_chat_id(now);
        self.messages = greeting(now);
    }

    pub fn delete(&mut self, id: &str, now: DateTime<Utc>) {
        self.histories.retain(|h| h.id != id);
        if self.current_id == id {
            // the deleted chat must not be re-saved on the way out
            self.messages = greeting(now);
            self.start_new(now);
        }
    }
}

fn greeting(now: DateTime<Utc>) -> Vec<ChatMessage> {
    vec![ChatMessage {
        id: 1,
        role: ChatRole::Assistant,
        content: GREETING.to_string(),
        timestamp: now,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).expect("timestamp")
    }

    #[test]
    fn fresh_session_is_not_saved() {
        let mut s = ChatSession::new(Vec::new(), at(0));
        assert_eq!(s.messages.len(), 1);
        assert_eq!(s.messages[0].content, GREETING);
        assert!(!s.save(at(1)));
        assert!(s.histories.is_empty());
    }

    #[test]
    fn reply_saves_with_truncated_title() {
        let mut s = ChatSession::new(Vec::new(), at(0));
        let prompt = s
            .push_user("  What should I do during an earthquake at night?  ", at(1))
            .expect("prompt");
        assert_eq!(prompt, "What should I do during an earthquake at night?");
        s.push_assistant("Drop, cover, hold on.".into(), at(2));

        assert_eq!(s.histories.len(), 1);
        assert_eq!(s.histories[0].id, DEFAULT_CHAT_ID);
        assert_eq!(s.histories[0].title, "What should I do during an ear");
        assert_eq!(s.histories[0].messages.len(), 3);
        assert_eq!(s.messages[2].id, 3);
    }

    #[test]
    fn blank_prompt_is_ignored() {
        let mut s = ChatSession::new(Vec::new(), at(0));
        assert!(s.push_user("   ", at(1)).is_none());
        assert_eq!(s.messages.len(), 1);
    }

    #[test]
    fn saving_twice_replaces_entry() {
        let mut s = ChatSession::new(Vec::new(), at(0));
        s.push_user("first", at(1));
        s.push_assistant("one".into(), at(2));
        s.push_user("second", at(3));
        s.push_assistant("two".into(), at(4));
        assert_eq!(s.histories.len(), 1);
        assert_eq!(s.histories[0].messages.len(), 5);
        assert_eq!(s.histories[0].timestamp, at(4));
    }

    #[test]
    fn new_chat_saves_then_resets() {
        let now = at(10);
        let mut s = ChatSession::new(Vec::new(), at(0));
        s.push_user("flood help", at(1));
        s.push_assistant("move uphill".into(), at(2));
        s.start_new(now);

        assert_eq!(s.current_id, format!("chat_{}", now.timestamp_millis()));
        assert_eq!(s.messages.len(), 1);
        assert_eq!(s.histories.len(), 1);

        assert!(s.load(DEFAULT_CHAT_ID, now + Duration::seconds(1)));
        assert_eq!(s.current_id, DEFAULT_CHAT_ID);
        assert_eq!(s.messages.len(), 3);
        assert!(!s.load("missing", now));
    }

    #[test]
    fn deleting_current_chat_starts_fresh() {
        let mut s = ChatSession::new(Vec::new(), at(0));
        s.push_user("gas smell", at(1));
        s.push_assistant("leave the building".into(), at(2));
        s.delete(DEFAULT_CHAT_ID, at(3));

        assert!(s.histories.is_empty());
        assert_ne!(s.current_id, DEFAULT_CHAT_ID);
        assert_eq!(s.messages.len(), 1);
    }

    #[test]
    fn histories_round_trip_through_storage() {
        let mut s = ChatSession::new(Vec::new(), at(0));
        s.push_user("hello", at(1));
        s.push_assistant("hi".into(), at(2));
        let raw = s.histories_json().expect("encode");

        let restored = ChatSession::restore(Some(&raw), at(5));
        assert_eq!(restored.histories, s.histories);
        assert_eq!(restored.current_id, DEFAULT_CHAT_ID);

        let broken = ChatSession::restore(Some("{not json"), at(5));
        assert!(broken.histories.is_empty());
    }

    #[test]
    fn reply_text_fallbacks() {
        assert_eq!(reply_text(Ok::<_, String>(Some("ok".into()))), "ok");
        assert_eq!(reply_text(Ok::<_, String>(None)), NO_RESPONSE);
        assert_eq!(reply_text(Ok::<_, String>(Some(String::new()))), NO_RESPONSE);
        assert_eq!(reply_text(Err::<Option<String>, _>("offline")), REQUEST_FAILED);
    }
}
