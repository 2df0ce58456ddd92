//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use uuid::Uuid;

use crate::models::{Identity, Message, MessageKind};
use crate::presence::PresenceRegistry;

/// Validate that a message carries the right payload for its kind
pub fn assert_message_shape(msg: &Message) {
    match msg.kind {
        MessageKind::Audio => {
            debug_assert!(
                msg.audio.is_some() && msg.content.is_none(),
                "Audio message {} must carry a payload and no content",
                msg.id
            );
        }
        MessageKind::Text | MessageKind::Alert | MessageKind::System => {
            debug_assert!(
                msg.content.is_some() && msg.audio.is_none(),
                "{:?} message {} must carry content and no payload",
                msg.kind,
                msg.id
            );
        }
    }

    debug_assert!(msg.id != Uuid::nil(), "Message has nil id");
}

/// Validate that log timestamps never decrease in insertion order
pub fn assert_log_monotonic(entries: &[Message]) {
    debug_assert!(
        entries.windows(2).all(|w| w[0].timestamp <= w[1].timestamp),
        "Message log timestamps regressed"
    );
}

/// Validate that the presence registry covers the whole department set
pub fn assert_presence_total(presence: &PresenceRegistry) {
    debug_assert_eq!(
        presence.total(),
        crate::models::Department::ALL.len(),
        "Presence registry is partial"
    );
}

/// Validate that an identity is well-formed
pub fn assert_identity_valid(identity: &Identity) {
    debug_assert!(
        identity.id != Uuid::nil(),
        "Identity {} has nil id",
        identity.display_name
    );

    debug_assert!(
        !identity.display_name.trim().is_empty(),
        "Identity {} has empty display name",
        identity.id
    );
}
