//! Status dashboard view model

use crewdeck_core::DeckStats;

const BAR_WIDTH: usize = 10;

/// Render the dashboard as printable lines: the two stat tiles followed
/// by one health row per department.
pub fn status_lines(stats: &DeckStats) -> Vec<String> {
    let mut lines = Vec::with_capacity(stats.health.len() + 2);

    lines.push(format!(
        "Online Departments: {} / {}",
        stats.online_departments, stats.total_departments
    ));
    lines.push(format!("Task Completion: {}%", stats.completion_percent));

    for row in &stats.health {
        lines.push(format!(
            "{:<12} {:<7} {} {:>3}%  {} assigned, {} done",
            row.department.label(),
            if row.online { "online" } else { "offline" },
            bar(row.progress_percent),
            row.progress_percent,
            row.assigned,
            row.done,
        ));
    }

    lines
}

fn bar(percent: u8) -> String {
    let filled = (percent as usize * BAR_WIDTH) / 100;
    let mut out = String::with_capacity(BAR_WIDTH + 2);
    out.push('[');
    for i in 0..BAR_WIDTH {
        out.push(if i < filled { '#' } else { '-' });
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewdeck_core::{stats, PresenceRegistry, TaskBoard};

    #[test]
    fn test_bar_rendering() {
        assert_eq!(bar(0), "[----------]");
        assert_eq!(bar(50), "[#####-----]");
        assert_eq!(bar(100), "[##########]");
    }

    #[test]
    fn test_status_lines_cover_every_department() {
        let presence = PresenceRegistry::seeded();
        let board = TaskBoard::seeded();
        let stats = stats::compute(&presence, board.tasks());

        let lines = status_lines(&stats);
        assert_eq!(lines.len(), 2 + stats.health.len());
        assert_eq!(lines[0], "Online Departments: 4 / 6");
        assert_eq!(lines[1], "Task Completion: 33%");
        assert!(lines.iter().any(|l| l.starts_with("STAGE")));
        assert!(lines.iter().any(|l| l.contains("offline")));
    }
}
