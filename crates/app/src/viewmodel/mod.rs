//! View models deriving presentation rows from console state
//!
//! Pure functions only: each view is recomputed from current state after
//! every mutation, nothing is cached here.

mod chat;
mod status;
mod tasks;

pub use chat::{chat_rows, ChatRow};
pub use status::status_lines;
pub use tasks::{task_rows, TaskRow};
