//! Application state management
//!
//! The shell's handle on the core console plus the bits of view state the
//! core deliberately does not own: the selected channel and the expiry
//! timer. All access goes through accessor methods; locks are held only
//! for the duration of one operation.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crewdeck_core::{
    AudioDispatch, AudioPayload, Console, DeckStats, Department, Identity, IntercomArm,
    IntercomState, Message, PresenceRegistry, Result, Target, Task, TaskStatus,
};
use uuid::Uuid;

use crate::config::ShellConfig;
use crate::timer::IntercomTimer;

/// Diagnostic snapshot of everything the shell renders
#[derive(Debug, Serialize)]
struct Snapshot {
    identity: Option<Identity>,
    selected_channel: Target,
    alert_mode: bool,
    presence: PresenceRegistry,
    intercom: IntercomState,
    messages: Vec<Message>,
    tasks: Vec<Task>,
}

/// Main application state
pub struct AppState {
    console: Arc<Mutex<Console>>,
    channel: Mutex<Target>,
    timer: Mutex<IntercomTimer>,
}

impl AppState {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            console: Arc::new(Mutex::new(Console::new(config.access_key.clone()))),
            channel: Mutex::new(Target::Broadcast),
            timer: Mutex::new(IntercomTimer::new()),
        }
    }

    pub fn selected_channel(&self) -> Target {
        *self.channel.lock().unwrap()
    }

    pub fn set_channel(&self, channel: Target) {
        *self.channel.lock().unwrap() = channel;
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.console.lock().unwrap().current_identity().cloned()
    }

    pub fn login(&self, name: &str, department: Department, key: &str) -> Result<Identity> {
        self.console.lock().unwrap().login(name, department, key)
    }

    pub fn logout(&self) {
        self.console.lock().unwrap().logout();
        // Back to the common channel for the next operator.
        self.set_channel(Target::Broadcast);
    }

    pub fn send_text(&self, target: Target, content: &str) -> Result<Message> {
        let mut console = self.console.lock().unwrap();
        console.send_text(target, content).map(|m| m.clone())
    }

    /// Send captured audio; broadcast sends also arm the expiry timer.
    pub fn send_audio(&self, target: Target, payload: AudioPayload) -> Result<AudioDispatch> {
        let dispatch = self.console.lock().unwrap().send_audio(target, payload)?;
        if let Some(arm) = dispatch.intercom {
            self.arm_intercom(arm);
        }
        Ok(dispatch)
    }

    pub fn arm_intercom(&self, arm: IntercomArm) {
        self.timer
            .lock()
            .unwrap()
            .arm(Arc::clone(&self.console), arm);
    }

    pub fn toggle_alert(&self) -> Result<bool> {
        self.console.lock().unwrap().toggle_alert()
    }

    pub fn update_task(&self, id: Uuid, status: TaskStatus) -> bool {
        self.console.lock().unwrap().update_task(id, status)
    }

    pub fn visible_messages(&self, channel: Target) -> Vec<Message> {
        self.console
            .lock()
            .unwrap()
            .visible_messages(channel)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn visible_tasks(&self) -> Vec<Task> {
        self.console
            .lock()
            .unwrap()
            .visible_tasks()
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn presence(&self) -> PresenceRegistry {
        self.console.lock().unwrap().presence().clone()
    }

    pub fn intercom(&self) -> IntercomState {
        self.console.lock().unwrap().intercom().clone()
    }

    pub fn alert_mode(&self) -> bool {
        self.console.lock().unwrap().alert_mode()
    }

    pub fn stats(&self) -> DeckStats {
        self.console.lock().unwrap().stats()
    }

    /// JSON dump of the full render state, for diagnostics
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        let console = self.console.lock().unwrap();
        let snapshot = Snapshot {
            identity: console.current_identity().cloned(),
            selected_channel: self.selected_channel(),
            alert_mode: console.alert_mode(),
            presence: console.presence().clone(),
            intercom: console.intercom().clone(),
            messages: console.log().entries().to_vec(),
            tasks: console.board().tasks().to_vec(),
        };
        serde_json::to_string_pretty(&snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewdeck_core::DEFAULT_ACCESS_KEY;

    fn state() -> AppState {
        AppState::new(&ShellConfig::default())
    }

    #[test]
    fn test_channel_defaults_to_broadcast() {
        let state = state();
        assert_eq!(state.selected_channel(), Target::Broadcast);
        state.set_channel(Target::Dept(Department::Tech));
        assert_eq!(state.selected_channel(), Target::Dept(Department::Tech));
    }

    #[test]
    fn test_logout_resets_channel() {
        let state = state();
        state
            .login("Ava", Department::Stage, DEFAULT_ACCESS_KEY)
            .unwrap();
        state.set_channel(Target::Dept(Department::Stage));
        state.logout();
        assert_eq!(state.selected_channel(), Target::Broadcast);
        assert!(state.current_identity().is_none());
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = state();
        state
            .login("Ava", Department::Stage, DEFAULT_ACCESS_KEY)
            .unwrap();
        state.send_text(Target::Broadcast, "mics hot").unwrap();

        let json = state.snapshot_json().unwrap();
        assert!(json.contains("\"Ava\""));
        assert!(json.contains("mics hot"));
        assert!(json.contains("alert_mode"));
    }
}
