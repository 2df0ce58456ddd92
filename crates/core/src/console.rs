//! The console: single controller owning all coordination state
//!
//! Every user intent (login, send, task update, alert toggle) and every
//! internal trigger (intercom expiry) is a synchronous method here that
//! runs to completion before the next. Side effects the core cannot
//! perform itself (timer scheduling, audio playback) are returned as
//! tickets for the shell to execute.

use chrono::Utc;
use uuid::Uuid;

use crate::board::TaskBoard;
use crate::error::{Error, Result};
use crate::intercom::{IntercomArm, IntercomSlot, IntercomState};
use crate::invariants;
use crate::log::MessageLog;
use crate::models::{AudioPayload, Department, Identity, Message, Target, Task, TaskStatus};
use crate::permissions::{ConsoleAction, PermissionMatrix};
use crate::presence::PresenceRegistry;
use crate::session::Session;
use crate::stats::{self, DeckStats};

/// Fixed alert broadcast content
pub const ALERT_CONTENT: &str = "EMERGENCY: ALL STATIONS REPORT!";

/// Outcome of an audio send: the stored message plus, for broadcasts, the
/// intercom arm ticket the shell must schedule.
#[derive(Debug, Clone)]
pub struct AudioDispatch {
    pub message: Message,
    pub intercom: Option<IntercomArm>,
}

pub struct Console {
    session: Session,
    presence: PresenceRegistry,
    log: MessageLog,
    board: TaskBoard,
    intercom: IntercomSlot,
    alert_mode: bool,
}

impl Console {
    pub fn new(access_key: impl Into<String>) -> Self {
        let presence = PresenceRegistry::seeded();
        invariants::assert_presence_total(&presence);

        Self {
            session: Session::new(access_key),
            presence,
            log: MessageLog::new(),
            board: TaskBoard::seeded(),
            intercom: IntercomSlot::new(),
            alert_mode: false,
        }
    }

    /// Log in and bring the department online. Appends the channel-active
    /// announcement addressed to the new operator's department.
    pub fn login(
        &mut self,
        display_name: &str,
        department: Department,
        access_key: &str,
    ) -> Result<Identity> {
        let previous = self.session.current().map(|i| i.department);
        let identity = self.session.login(display_name, department, access_key)?;
        invariants::assert_identity_valid(&identity);

        // Single-operator device: a replaced session releases its desk.
        if let Some(prev) = previous {
            if prev != department {
                self.presence.set_online(prev, false);
            }
        }
        self.presence.set_online(department, true);

        self.log.append(Message::system(
            Target::Dept(department),
            format!(
                "Operational: {} channel active. Common Channel 001 Open.",
                department.label()
            ),
        ));

        Ok(identity)
    }

    /// Clear the session and take the department offline
    pub fn logout(&mut self) {
        if let Some(identity) = self.session.logout() {
            self.presence.set_online(identity.department, false);
        }
    }

    /// Append a text message from the logged-in operator
    pub fn send_text(&mut self, to: Target, content: impl Into<String>) -> Result<&Message> {
        let sender = self.sender()?;
        Ok(self.log.append(Message::text(&sender, to, content)))
    }

    /// Append an audio message from the logged-in operator. Broadcast audio
    /// also goes on the air: the slot is (re)armed and the ticket returned
    /// so the shell can schedule expiry and start playback.
    pub fn send_audio(&mut self, to: Target, payload: AudioPayload) -> Result<AudioDispatch> {
        let sender = self.sender()?;
        let message = self.log.append(Message::audio(&sender, to, payload)).clone();

        let intercom = if to == Target::Broadcast {
            Some(self.intercom.begin(message.clone(), Utc::now()))
        } else {
            None
        };

        Ok(AudioDispatch { message, intercom })
    }

    /// Expiry callback from the timer collaborator. Stale generations are
    /// rejected by the slot.
    pub fn expire_intercom(&mut self, generation: u64) -> bool {
        self.intercom.expire(generation)
    }

    /// Flip alert mode. Admin only; engaging appends exactly one alert
    /// broadcast, clearing appends nothing.
    pub fn toggle_alert(&mut self) -> Result<bool> {
        let dept = self.sender()?.department;
        if !PermissionMatrix::can_perform(dept, ConsoleAction::ToggleAlert) {
            return Err(Error::PermissionDenied(
                "only ADMIN may toggle alert mode".to_string(),
            ));
        }

        self.alert_mode = !self.alert_mode;
        if self.alert_mode {
            self.log.append(Message::alert(ALERT_CONTENT));
            tracing::warn!("alert mode engaged");
        } else {
            tracing::info!("alert mode cleared");
        }
        Ok(self.alert_mode)
    }

    /// Forward a status update to the board; unknown ids no-op there
    pub fn update_task(&mut self, id: Uuid, status: TaskStatus) -> bool {
        self.board.update_status(id, status)
    }

    fn sender(&self) -> Result<Identity> {
        self.session
            .current()
            .cloned()
            .ok_or(Error::NotLoggedIn)
    }

    // ---- Derived views ----------------------------------------------------

    pub fn current_identity(&self) -> Option<&Identity> {
        self.session.current()
    }

    pub fn visible_messages(&self, channel: Target) -> Vec<&Message> {
        self.log.visible(channel)
    }

    /// Task board scoped to the logged-in operator; empty when logged out
    pub fn visible_tasks(&self) -> Vec<&Task> {
        match self.session.current() {
            Some(identity) => self.board.visible(identity),
            None => Vec::new(),
        }
    }

    pub fn presence(&self) -> &PresenceRegistry {
        &self.presence
    }

    pub fn intercom(&self) -> &IntercomState {
        self.intercom.state()
    }

    pub fn alert_mode(&self) -> bool {
        self.alert_mode
    }

    pub fn stats(&self) -> DeckStats {
        stats::compute(&self.presence, self.board.tasks())
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn board(&self) -> &TaskBoard {
        &self.board
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(crate::session::DEFAULT_ACCESS_KEY)
    }
}
