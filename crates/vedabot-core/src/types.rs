//! Transport-neutral message envelopes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of conversation a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadType {
    Direct,
    Group,
}

/// A message received from a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub channel: String,
    /// Conversation to reply into (Telegram chat id, "cli", ...).
    pub thread_id: String,
    pub sender_id: String,
    /// Sender's first name, used for greetings.
    pub sender_name: Option<String>,
    pub sender_username: Option<String>,
    pub content: String,
    pub thread_type: ThreadType,
    pub timestamp: DateTime<Utc>,
}

impl IncomingMessage {
    /// Whether the content is a bot command: `/` directly followed by a command word.
    pub fn is_command(&self) -> bool {
        self.command().is_some()
    }

    /// Command name without the leading slash or `@botname` suffix.
    pub fn command(&self) -> Option<&str> {
        self.parse_command().map(|(name, _)| name)
    }

    /// Bot username after `@` in `/start@VedasBot`, if any.
    pub fn command_mention(&self) -> Option<&str> {
        self.parse_command().and_then(|(_, mention)| mention)
    }

    fn parse_command(&self) -> Option<(&str, Option<&str>)> {
        let rest = self.content.trim_start().strip_prefix('/')?;
        let len = command_word_len(rest);
        if len == 0 {
            return None;
        }
        let (name, tail) = rest.split_at(len);
        let mention = tail
            .strip_prefix('@')
            .map(|t| &t[..command_word_len(t)])
            .filter(|m| !m.is_empty());
        Some((name, mention))
    }
}

/// Length of the leading `[A-Za-z0-9_]` run.
fn command_word_len(s: &str) -> usize {
    s.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(s.len())
}

/// A message to send through a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub thread_id: String,
    pub content: String,
}

impl OutgoingMessage {
    /// Reply into the thread an incoming message came from.
    pub fn reply_to(incoming: &IncomingMessage, content: impl Into<String>) -> Self {
        Self {
            thread_id: incoming.thread_id.clone(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(content: &str) -> IncomingMessage {
        IncomingMessage {
            channel: "test".into(),
            thread_id: "42".into(),
            sender_id: "7".into(),
            sender_name: Some("Arjuna".into()),
            sender_username: None,
            content: content.into(),
            thread_type: ThreadType::Direct,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_command_parsing() {
        assert_eq!(msg("/start").command(), Some("start"));
        assert_eq!(msg("/start@VedasBot").command(), Some("start"));
        assert_eq!(msg("  /start now").command(), Some("start"));
        assert_eq!(msg("/start!").command(), Some("start"));
        assert_eq!(msg("what is karma").command(), None);
        assert!(!msg("karma /start").is_command());
    }

    #[test]
    fn test_slash_without_command_word_is_text() {
        assert!(!msg("/").is_command());
        assert!(!msg("/ what is karma").is_command());
        assert_eq!(msg("/ what is karma").command(), None);
    }

    #[test]
    fn test_command_mention() {
        assert_eq!(msg("/start@VedasBot").command_mention(), Some("VedasBot"));
        assert_eq!(msg("/start@OtherBot hi").command_mention(), Some("OtherBot"));
        assert_eq!(msg("/start").command_mention(), None);
        assert_eq!(msg("/start@").command_mention(), None);
    }

    #[test]
    fn test_reply_to_keeps_thread() {
        let out = OutgoingMessage::reply_to(&msg("karma"), "answer");
        assert_eq!(out.thread_id, "42");
        assert_eq!(out.content, "answer");
    }
}
