//! Dashboard aggregates derived from presence and task state
//!
//! Pure derivation; recomputed from current state on every render.

use serde::Serialize;

use crate::models::{Department, Task, TaskStatus};
use crate::presence::PresenceRegistry;

/// Per-department row on the health monitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeptHealth {
    pub department: Department,
    pub online: bool,
    pub assigned: usize,
    pub done: usize,
    /// Share of this department's tasks that are done; 100 when nothing
    /// is assigned.
    pub progress_percent: u8,
}

/// The status dashboard in numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckStats {
    pub online_departments: usize,
    pub total_departments: usize,
    /// Share of all tasks that are done; 0 on an empty board
    pub completion_percent: u8,
    pub health: Vec<DeptHealth>,
}

pub fn compute(presence: &PresenceRegistry, tasks: &[Task]) -> DeckStats {
    let done_total = tasks.iter().filter(|t| t.status == TaskStatus::Done).count();
    let completion_percent = percent(done_total, tasks.len(), 0);

    let health = presence
        .iter()
        .map(|(department, online)| {
            let assigned = tasks.iter().filter(|t| t.assigned_dept == department).count();
            let done = tasks
                .iter()
                .filter(|t| t.assigned_dept == department && t.status == TaskStatus::Done)
                .count();
            DeptHealth {
                department,
                online,
                assigned,
                done,
                progress_percent: percent(done, assigned, 100),
            }
        })
        .collect();

    DeckStats {
        online_departments: presence.online_count(),
        total_departments: presence.total(),
        completion_percent,
        health,
    }
}

fn percent(part: usize, whole: usize, when_empty: u8) -> u8 {
    if whole == 0 {
        return when_empty;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TaskBoard;

    #[test]
    fn test_seeded_overview() {
        let presence = PresenceRegistry::seeded();
        let board = TaskBoard::seeded();
        let stats = compute(&presence, board.tasks());

        assert_eq!(stats.online_departments, 4);
        assert_eq!(stats.total_departments, 6);
        // One of three seed tasks is done.
        assert_eq!(stats.completion_percent, 33);
        assert_eq!(stats.health.len(), 6);
    }

    #[test]
    fn test_empty_board_is_zero_percent() {
        let presence = PresenceRegistry::new();
        let stats = compute(&presence, &[]);
        assert_eq!(stats.completion_percent, 0);
        assert_eq!(stats.online_departments, 0);
    }

    #[test]
    fn test_department_without_tasks_reads_full_progress() {
        let presence = PresenceRegistry::seeded();
        let board = TaskBoard::seeded();
        let stats = compute(&presence, board.tasks());

        let security = stats
            .health
            .iter()
            .find(|h| h.department == Department::Security)
            .unwrap();
        assert_eq!(security.assigned, 0);
        assert_eq!(security.progress_percent, 100);

        let media = stats
            .health
            .iter()
            .find(|h| h.department == Department::Media)
            .unwrap();
        assert_eq!(media.assigned, 1);
        assert_eq!(media.done, 1);
        assert_eq!(media.progress_percent, 100);

        let stage = stats
            .health
            .iter()
            .find(|h| h.department == Department::Stage)
            .unwrap();
        assert_eq!(stage.progress_percent, 0);
    }
}
