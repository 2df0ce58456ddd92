//! Chat view model

use crewdeck_core::{Identity, Message, MessageKind};

/// One printable chat line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRow {
    pub kind: MessageKind,
    /// "STAGE • Ava"; empty for system lines
    pub header: String,
    pub body: String,
    /// HH:MM
    pub time: String,
    pub is_own: bool,
}

pub fn chat_rows(messages: &[Message], viewer: Option<&Identity>) -> Vec<ChatRow> {
    messages.iter().map(|msg| row(msg, viewer)).collect()
}

fn row(msg: &Message, viewer: Option<&Identity>) -> ChatRow {
    let is_own = viewer
        .map(|v| v.display_name == msg.from_name)
        .unwrap_or(false);

    let header = match msg.kind {
        MessageKind::System => String::new(),
        _ => format!("{} • {}", msg.from_dept.label(), msg.from_name),
    };

    let body = match (&msg.content, &msg.audio) {
        (Some(content), _) => content.clone(),
        (None, Some(audio)) => format!("[voice clip, {}]", audio.mime),
        (None, None) => String::new(),
    };

    ChatRow {
        kind: msg.kind,
        header,
        body,
        time: msg.format_timestamp(),
        is_own,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewdeck_core::{AudioPayload, Department, Target};

    fn ava() -> Identity {
        Identity::new("Ava".to_string(), Department::Stage)
    }

    #[test]
    fn test_text_row_attribution() {
        let sender = ava();
        let msg = Message::text(&sender, Target::Broadcast, "mics hot");
        let rows = chat_rows(std::slice::from_ref(&msg), Some(&sender));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].header, "STAGE • Ava");
        assert_eq!(rows[0].body, "mics hot");
        assert!(rows[0].is_own);
        assert_eq!(rows[0].time.len(), 5);
    }

    #[test]
    fn test_other_senders_are_not_own() {
        let sender = ava();
        let viewer = Identity::new("Ben".to_string(), Department::Tech);
        let msg = Message::text(&sender, Target::Broadcast, "mics hot");
        let rows = chat_rows(std::slice::from_ref(&msg), Some(&viewer));
        assert!(!rows[0].is_own);
    }

    #[test]
    fn test_system_row_has_no_header() {
        let msg = Message::system(Target::Dept(Department::Stage), "channel active");
        let rows = chat_rows(std::slice::from_ref(&msg), None);
        assert!(rows[0].header.is_empty());
        assert_eq!(rows[0].body, "channel active");
        assert!(!rows[0].is_own);
    }

    #[test]
    fn test_audio_row_marks_clip() {
        let sender = ava();
        let msg = Message::audio(&sender, Target::Broadcast, AudioPayload::from_bytes(b"clip"));
        let rows = chat_rows(std::slice::from_ref(&msg), Some(&sender));
        assert_eq!(rows[0].body, "[voice clip, audio/webm]");
        assert_eq!(rows[0].kind, MessageKind::Audio);
    }
}
