//! Intercom slot: the transient "on-air" broadcast indicator
//!
//! Holds at most the latest broadcast audio message. A new broadcast
//! pre-empts the current occupant rather than queueing behind it. Expiry
//! is guarded by a generation counter so a superseded deadline can never
//! clear a newer occupant, no matter how late its callback fires.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Message;

/// How long a broadcast stays on-air after its last transmission
pub const INTERCOM_DWELL_MS: u64 = 4000;

#[derive(Debug, Clone, Serialize)]
pub enum IntercomState {
    Idle,
    Active {
        message: Message,
        expires_at: DateTime<Utc>,
        generation: u64,
    },
}

impl IntercomState {
    pub fn active_message(&self) -> Option<&Message> {
        match self {
            IntercomState::Active { message, .. } => Some(message),
            IntercomState::Idle => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, IntercomState::Active { .. })
    }
}

/// Ticket handed to the shell when the slot is (re)armed: schedule an
/// expiry callback for `generation` after `dwell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntercomArm {
    pub generation: u64,
    pub dwell: Duration,
}

#[derive(Debug)]
pub struct IntercomSlot {
    state: IntercomState,
    next_generation: u64,
}

impl IntercomSlot {
    pub fn new() -> Self {
        Self {
            state: IntercomState::Idle,
            next_generation: 0,
        }
    }

    /// Put a broadcast on the air, replacing any current occupant. The
    /// returned ticket carries the generation the shell must schedule;
    /// the superseded generation is stale from this point on.
    pub fn begin(&mut self, message: Message, now: DateTime<Utc>) -> IntercomArm {
        self.next_generation += 1;
        let generation = self.next_generation;

        if let IntercomState::Active { generation: old, .. } = self.state {
            tracing::debug!(old, new = generation, "intercom pre-empted");
        } else {
            tracing::debug!(generation, "intercom on air");
        }

        self.state = IntercomState::Active {
            message,
            expires_at: now + chrono::Duration::milliseconds(INTERCOM_DWELL_MS as i64),
            generation,
        };

        IntercomArm {
            generation,
            dwell: Duration::from_millis(INTERCOM_DWELL_MS),
        }
    }

    /// Expiry callback. Clears the slot only when `generation` still names
    /// the current occupant; stale generations are ignored.
    pub fn expire(&mut self, generation: u64) -> bool {
        match self.state {
            IntercomState::Active {
                generation: current,
                ..
            } if current == generation => {
                tracing::debug!(generation, "intercom off air");
                self.state = IntercomState::Idle;
                true
            }
            _ => {
                tracing::debug!(generation, "stale intercom expiry ignored");
                false
            }
        }
    }

    pub fn state(&self) -> &IntercomState {
        &self.state
    }

    pub fn active_message(&self) -> Option<&Message> {
        self.state.active_message()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }
}

impl Default for IntercomSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AudioPayload, Department, Identity, Target};

    fn clip(label: &str) -> Message {
        let from = Identity::new("Ops".to_string(), Department::Admin);
        Message::audio(
            &from,
            Target::Broadcast,
            AudioPayload::from_bytes(label.as_bytes()),
        )
    }

    #[test]
    fn test_idle_to_active() {
        let mut slot = IntercomSlot::new();
        assert!(!slot.is_active());

        let now = Utc::now();
        let arm = slot.begin(clip("m1"), now);
        assert!(slot.is_active());
        assert_eq!(arm.dwell, Duration::from_millis(INTERCOM_DWELL_MS));

        match slot.state() {
            IntercomState::Active { expires_at, .. } => {
                assert_eq!(*expires_at, now + chrono::Duration::milliseconds(4000));
            }
            IntercomState::Idle => panic!("slot should be active"),
        }
    }

    #[test]
    fn test_preemption_replaces_occupant() {
        let mut slot = IntercomSlot::new();
        let m1 = clip("m1");
        let m2 = clip("m2");
        let m2_id = m2.id;

        let first = slot.begin(m1, Utc::now());
        let second = slot.begin(m2, Utc::now());
        assert_ne!(first.generation, second.generation);

        // Only the most recent broadcast is represented.
        assert_eq!(slot.active_message().unwrap().id, m2_id);
    }

    #[test]
    fn test_stale_expiry_never_clears_newer_occupant() {
        let mut slot = IntercomSlot::new();
        let first = slot.begin(clip("m1"), Utc::now());
        let second = slot.begin(clip("m2"), Utc::now());

        // The first broadcast's deadline fires late: no flicker to idle.
        assert!(!slot.expire(first.generation));
        assert!(slot.is_active());

        assert!(slot.expire(second.generation));
        assert!(!slot.is_active());
    }

    #[test]
    fn test_expiry_on_idle_slot_is_noop() {
        let mut slot = IntercomSlot::new();
        assert!(!slot.expire(7));
        assert!(!slot.is_active());
    }

    #[test]
    fn test_rearm_after_expiry() {
        let mut slot = IntercomSlot::new();
        let first = slot.begin(clip("m1"), Utc::now());
        assert!(slot.expire(first.generation));

        let second = slot.begin(clip("m2"), Utc::now());
        assert!(second.generation > first.generation);
        assert!(slot.is_active());
    }
}
