//! Room state: message history and membership.

use crate::state::Message;
use std::collections::HashSet;

/// A named room: append-only chronological history plus current members.
///
/// Ordinary rooms and IM rooms share this shape; the namespace split lives in
/// the room *name* rules, not here.
#[derive(Debug)]
pub struct Room {
    /// Unique name.
    pub name: String,
    /// Append-only, chronological. Retention is unbounded; "recent N" is a
    /// read view, never a truncation.
    messages: Vec<Message>,
    /// Names of current members.
    members: HashSet<String>,
}

impl Room {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
            members: HashSet::new(),
        }
    }

    /// Append one message to the history.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// The most recent `n` messages, oldest first.
    pub fn recent(&self, n: usize) -> &[Message] {
        let start = self.messages.len().saturating_sub(n);
        &self.messages[start..]
    }

    pub fn has_member(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    /// Add a member; returns false if already present.
    pub fn add_member(&mut self, name: &str) -> bool {
        self.members.insert(name.to_string())
    }

    /// Remove a member; returns false if absent.
    pub fn remove_member(&mut self, name: &str) -> bool {
        self.members.remove(name)
    }

    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }
}
