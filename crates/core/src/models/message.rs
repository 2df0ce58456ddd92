//! Message model for the coordination log

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Department, Identity, Target};

/// Message kinds carried on the log. Text and Audio come from operator
/// sends; Alert and System are produced by internal triggers only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    Text,
    Audio,
    Alert,
    System,
}

/// A captured audio clip. Opaque apart from its container label; the log
/// never inspects the samples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioPayload {
    pub mime: String,
    /// Base64-encoded clip bytes
    pub data: String,
}

impl AudioPayload {
    pub const DEFAULT_MIME: &'static str = "audio/webm";

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            mime: Self::DEFAULT_MIME.to_string(),
            data: BASE64.encode(bytes),
        }
    }

    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        BASE64.decode(&self.data)
    }

    /// Render the payload the way a browser audio element would consume it
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.data)
    }
}

/// One entry on the append-only message log. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub from_name: String,
    pub from_dept: Department,
    pub to: Target,
    /// Populated for Text/Alert/System
    pub content: Option<String>,
    /// Populated for Audio
    pub audio: Option<AudioPayload>,
    pub timestamp: DateTime<Utc>,
    pub kind: MessageKind,
}

impl Message {
    pub fn text(from: &Identity, to: Target, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            from_name: from.display_name.clone(),
            from_dept: from.department,
            to,
            content: Some(content.into()),
            audio: None,
            timestamp: Utc::now(),
            kind: MessageKind::Text,
        }
    }

    pub fn audio(from: &Identity, to: Target, payload: AudioPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            from_name: from.display_name.clone(),
            from_dept: from.department,
            to,
            content: None,
            audio: Some(payload),
            timestamp: Utc::now(),
            kind: MessageKind::Audio,
        }
    }

    /// System announcement (welcome lines, lifecycle notices). Authored by
    /// the system under the Admin department.
    pub fn system(to: Target, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            from_name: "System".to_string(),
            from_dept: Department::Admin,
            to,
            content: Some(content.into()),
            audio: None,
            timestamp: Utc::now(),
            kind: MessageKind::System,
        }
    }

    /// Alert broadcast. Always authored as ADMIN and addressed to everyone.
    pub fn alert(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            from_name: "ADMIN".to_string(),
            from_dept: Department::Admin,
            to: Target::Broadcast,
            content: Some(content.into()),
            audio: None,
            timestamp: Utc::now(),
            kind: MessageKind::Alert,
        }
    }

    pub fn format_timestamp(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ava() -> Identity {
        Identity::new("Ava".to_string(), Department::Stage)
    }

    #[test]
    fn test_text_message_shape() {
        let msg = Message::text(&ava(), Target::Dept(Department::Tech), "check monitors");
        assert_eq!(msg.kind, MessageKind::Text);
        assert_eq!(msg.from_dept, Department::Stage);
        assert_eq!(msg.content.as_deref(), Some("check monitors"));
        assert!(msg.audio.is_none());
    }

    #[test]
    fn test_audio_message_shape() {
        let msg = Message::audio(&ava(), Target::Broadcast, AudioPayload::from_bytes(b"pcm"));
        assert_eq!(msg.kind, MessageKind::Audio);
        assert!(msg.content.is_none());
        assert!(msg.audio.is_some());
    }

    #[test]
    fn test_alert_is_broadcast_from_admin() {
        let msg = Message::alert("EMERGENCY: ALL STATIONS REPORT!");
        assert_eq!(msg.kind, MessageKind::Alert);
        assert_eq!(msg.to, Target::Broadcast);
        assert_eq!(msg.from_dept, Department::Admin);
        assert_eq!(msg.from_name, "ADMIN");
    }

    #[test]
    fn test_system_message_author() {
        let msg = Message::system(Target::Dept(Department::Stage), "channel active");
        assert_eq!(msg.kind, MessageKind::System);
        assert_eq!(msg.from_name, "System");
        assert_eq!(msg.from_dept, Department::Admin);
    }

    #[test]
    fn test_payload_encoding() {
        let payload = AudioPayload::from_bytes(b"hi");
        assert_eq!(payload.data, "aGk=");
        assert_eq!(payload.decode().unwrap(), b"hi");
        assert_eq!(payload.data_url(), "data:audio/webm;base64,aGk=");
    }
}
