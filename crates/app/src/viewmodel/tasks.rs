//! Task board view model

use crewdeck_core::{Task, TaskStatus};
use uuid::Uuid;

/// One task card. `index` is the 1-based row number operators use to
/// address the task from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub index: usize,
    pub id: Uuid,
    pub dept: &'static str,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    /// HH:MM of the last update
    pub updated: String,
}

pub fn task_rows(tasks: &[Task]) -> Vec<TaskRow> {
    tasks
        .iter()
        .enumerate()
        .map(|(i, task)| TaskRow {
            index: i + 1,
            id: task.id,
            dept: task.assigned_dept.label(),
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            updated: task.updated_at.format("%H:%M").to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewdeck_core::{Department, TaskBoard};

    #[test]
    fn test_rows_are_one_indexed() {
        let board = TaskBoard::seeded();
        let rows = task_rows(board.tasks());

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[2].index, 3);
        assert_eq!(rows[0].dept, Department::Stage.label());
        assert_eq!(rows[0].title, "Check Mic Batteries");
    }

    #[test]
    fn test_row_carries_status_and_id() {
        let board = TaskBoard::seeded();
        let rows = task_rows(board.tasks());
        assert_eq!(rows[2].status, TaskStatus::Done);
        assert_eq!(rows[2].id, board.tasks()[2].id);
        assert_eq!(rows[0].updated.len(), 5);
    }
}
