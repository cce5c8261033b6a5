//! Chat messages.

use chrono::{DateTime, Local};

/// One stored chat message, immutable once created.
#[derive(Debug, Clone)]
pub struct Message {
    /// Name of the room this copy belongs to.
    pub room: String,
    /// Sender's user name.
    pub sender: String,
    /// When the send was processed.
    pub sent_at: DateTime<Local>,
    /// Trimmed, non-empty message text.
    pub text: String,
}

impl Message {
    pub fn new(
        room: impl Into<String>,
        sender: impl Into<String>,
        sent_at: DateTime<Local>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            room: room.into(),
            sender: sender.into(),
            sent_at,
            text: text.into(),
        }
    }

    /// Render as `[room](timestamp)<sender>: text`.
    pub fn formatted(&self) -> String {
        format!(
            "[{}]({})<{}>: {}",
            self.room,
            self.sent_at.format("%Y-%m-%d %H:%M:%S"),
            self.sender,
            self.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formatted_layout() {
        let sent_at = Local.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        let msg = Message::new("general", "alice", sent_at, "hello there");
        assert_eq!(
            msg.formatted(),
            "[general](2026-03-14 09:26:53)<alice>: hello there"
        );
    }
}
