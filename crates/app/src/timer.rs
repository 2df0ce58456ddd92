//! Intercom expiry timer collaborator
//!
//! Schedules the slot's expiry callback on the tokio runtime. Re-arming
//! aborts the previous task, but correctness never rests on the abort:
//! a stale task that fires anyway carries a superseded generation and is
//! rejected by the slot.

use std::sync::{Arc, Mutex};

use crewdeck_core::{Console, IntercomArm};
use tokio::task::JoinHandle;

#[derive(Debug, Default)]
pub struct IntercomTimer {
    pending: Option<JoinHandle<()>>,
}

impl IntercomTimer {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Arm the expiry for `arm.generation` after `arm.dwell`, cancelling
    /// any previously scheduled expiry.
    pub fn arm(&mut self, console: Arc<Mutex<Console>>, arm: IntercomArm) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        let generation = arm.generation;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(arm.dwell).await;
            let cleared = console.lock().unwrap().expire_intercom(generation);
            if cleared {
                tracing::debug!(generation, "intercom slot released");
            }
        }));
    }

    /// Drop the pending expiry without firing it
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
