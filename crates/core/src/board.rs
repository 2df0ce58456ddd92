//! Task board for department work items
//!
//! Tasks are seeded at construction and only ever mutated through status
//! updates; there is no creation or deletion surface in this scope.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{Department, Identity, Task, TaskStatus};
use crate::permissions::{ConsoleAction, PermissionMatrix};

#[derive(Debug, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// The fixed event-day work list
    pub fn seeded() -> Self {
        Self {
            tasks: vec![
                Task::new(
                    "Check Mic Batteries",
                    "Wireless packs for hosts",
                    Department::Stage,
                    TaskStatus::Pending,
                ),
                Task::new(
                    "VVIP Catering",
                    "Table 4 requires drinks",
                    Department::Hospitality,
                    TaskStatus::InProgress,
                ),
                Task::new(
                    "Main Feed Test",
                    "OBS sync check",
                    Department::Media,
                    TaskStatus::Done,
                ),
            ],
        }
    }

    /// Set a task's status. Unknown ids are a guarded no-op; `updated_at`
    /// refreshes on every accepted update, including status-equal ones.
    pub fn update_status(&mut self, id: Uuid, status: TaskStatus) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.status = status;
                task.updated_at = Utc::now();
                tracing::debug!(task = %task.title, status = %status, "task status updated");
                true
            }
            None => {
                tracing::warn!(%id, "status update for unknown task ignored");
                false
            }
        }
    }

    /// Scope the board to a viewer: admins see everything, everyone else
    /// sees only their own department's tasks.
    pub fn visible(&self, viewer: &Identity) -> Vec<&Task> {
        if PermissionMatrix::can_perform(viewer.department, ConsoleAction::ViewAllTasks) {
            self.tasks.iter().collect()
        } else {
            self.tasks
                .iter()
                .filter(|t| t.assigned_dept == viewer.department)
                .collect()
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
