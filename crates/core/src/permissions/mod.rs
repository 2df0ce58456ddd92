//! Permission checks for console operations

use crate::models::Department;

/// Actions a logged-in operator can attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleAction {
    SendMessages,
    UpdateTasks,
    ViewAllTasks,
    ToggleAlert,
}

/// Permission matrix for department roles
pub struct PermissionMatrix;

impl PermissionMatrix {
    /// Check if a department may perform an action
    pub fn can_perform(dept: Department, action: ConsoleAction) -> bool {
        match action {
            // Every desk can talk and work its own board
            ConsoleAction::SendMessages => true,
            ConsoleAction::UpdateTasks => true,

            // Admin only
            ConsoleAction::ViewAllTasks => dept.is_admin(),
            ConsoleAction::ToggleAlert => dept.is_admin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everyone_can_send_and_update() {
        for dept in Department::ALL {
            assert!(PermissionMatrix::can_perform(dept, ConsoleAction::SendMessages));
            assert!(PermissionMatrix::can_perform(dept, ConsoleAction::UpdateTasks));
        }
    }

    #[test]
    fn test_alert_toggle_is_admin_only() {
        assert!(PermissionMatrix::can_perform(Department::Admin, ConsoleAction::ToggleAlert));
        for dept in Department::ALL.iter().filter(|d| !d.is_admin()) {
            assert!(!PermissionMatrix::can_perform(*dept, ConsoleAction::ToggleAlert));
        }
    }

    #[test]
    fn test_full_board_view_is_admin_only() {
        assert!(PermissionMatrix::can_perform(Department::Admin, ConsoleAction::ViewAllTasks));
        assert!(!PermissionMatrix::can_perform(Department::Stage, ConsoleAction::ViewAllTasks));
    }
}
