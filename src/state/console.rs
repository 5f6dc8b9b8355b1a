// Activity console state.
// Bounded log of timestamped messages shown on the Activity panel.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// Console message level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Info,
    Warn,
    Error,
}

/// A console message for the activity log.
#[derive(Debug, Clone)]
pub struct ConsoleMessage {
    pub level: ConsoleLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ConsoleMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: ConsoleLevel::Info,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            level: ConsoleLevel::Warn,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ConsoleLevel::Error,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Rolling buffer of console messages, oldest dropped past the cap.
#[derive(Debug, Default)]
pub struct ConsoleState {
    messages: VecDeque<ConsoleMessage>,
}

impl ConsoleState {
    const MAX_MESSAGES: usize = 256;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ConsoleMessage::info(message));
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(ConsoleMessage::warn(message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ConsoleMessage::error(message));
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> impl Iterator<Item = &ConsoleMessage> {
        self.messages.iter()
    }

    /// The `count` newest messages, oldest of those first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &ConsoleMessage> {
        let skip = self.messages.len().saturating_sub(count);
        self.messages.iter().skip(skip)
    }

    fn push(&mut self, message: ConsoleMessage) {
        self.messages.push_back(message);
        while self.messages.len() > Self::MAX_MESSAGES {
            self.messages.pop_front();
        }
    }
}
