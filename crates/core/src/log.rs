//! Append-only message log and channel filtering
//!
//! The log is the ordered history of everything said on the back-channel.
//! Entries are never reordered, mutated, or removed; views are derived
//! per-channel on demand.

use crate::invariants;
use crate::models::{Message, MessageKind, Target};

#[derive(Debug, Default)]
pub struct MessageLog {
    entries: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a message and return a reference to the stored entry.
    ///
    /// Timestamps must be non-decreasing in insertion order; a message whose
    /// clock reads earlier than the current tail adopts the tail timestamp.
    pub fn append(&mut self, mut msg: Message) -> &Message {
        invariants::assert_message_shape(&msg);

        if let Some(last) = self.entries.last() {
            if msg.timestamp < last.timestamp {
                msg.timestamp = last.timestamp;
            }
        }

        let index = self.entries.len();
        self.entries.push(msg);
        invariants::assert_log_monotonic(&self.entries);
        &self.entries[index]
    }

    /// Derive the channel view. Pure; recomputed on every call, never stored.
    ///
    /// Broadcast shows broadcast traffic plus every alert (alerts cannot be
    /// filtered away). A department channel shows traffic addressed to the
    /// department and traffic originated by it (party-line visibility).
    pub fn visible(&self, channel: Target) -> Vec<&Message> {
        self.entries
            .iter()
            .filter(|m| Self::on_channel(channel, m))
            .collect()
    }

    fn on_channel(channel: Target, msg: &Message) -> bool {
        match channel {
            Target::Broadcast => msg.to == Target::Broadcast || msg.kind == MessageKind::Alert,
            Target::Dept(dept) => msg.to == Target::Dept(dept) || msg.from_dept == dept,
        }
    }

    pub fn entries(&self) -> &[Message] {
        &self.entries
    }

    pub fn last(&self) -> Option<&Message> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
