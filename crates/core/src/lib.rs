//! Crewdeck Core Library
//!
//! Session, presence, message log, task board, intercom slot and alert
//! state for the Crewdeck coordination console.

pub mod board;
pub mod console;
pub mod error;
pub mod intercom;
pub mod invariants;
pub mod log;
pub mod models;
pub mod permissions;
pub mod presence;
pub mod session;
pub mod stats;

pub use board::TaskBoard;
pub use console::{AudioDispatch, Console, ALERT_CONTENT};
pub use error::{AuthError, Error, Result};
pub use intercom::{IntercomArm, IntercomSlot, IntercomState, INTERCOM_DWELL_MS};
pub use log::MessageLog;
pub use models::*;
pub use permissions::{ConsoleAction, PermissionMatrix};
pub use presence::PresenceRegistry;
pub use session::{Session, DEFAULT_ACCESS_KEY};
pub use stats::{DeckStats, DeptHealth};
