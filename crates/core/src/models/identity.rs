//! Operator identity model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Department;

/// The operator logged in on this device. Created at login, cleared at
/// logout; the id is never reused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub display_name: String,
    pub department: Department,
    pub is_online: bool,
}

impl Identity {
    pub fn new(display_name: String, department: Department) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name,
            department,
            is_online: true,
        }
    }
}
