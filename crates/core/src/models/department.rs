//! Department and message-target models

use serde::{Deserialize, Serialize};

/// Operational departments, a fixed closed set. The variant itself is the
/// identity; there is no separate id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Department {
    Admin,
    Media,
    Stage,
    Tech,
    Hospitality,
    Security,
}

impl Department {
    /// All departments in canonical display order
    pub const ALL: [Department; 6] = [
        Department::Admin,
        Department::Media,
        Department::Stage,
        Department::Tech,
        Department::Hospitality,
        Department::Security,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Department::Admin => "ADMIN",
            Department::Media => "MEDIA",
            Department::Stage => "STAGE",
            Department::Tech => "TECH",
            Department::Hospitality => "HOSPITALITY",
            Department::Security => "SECURITY",
        }
    }

    /// Parse a department label, case-insensitively
    pub fn parse(input: &str) -> Option<Department> {
        let needle = input.trim();
        Department::ALL
            .iter()
            .copied()
            .find(|d| d.label().eq_ignore_ascii_case(needle))
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Department::Admin)
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Message destination: a single department or the open broadcast channel.
/// Doubles as the channel selector for the chat view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    Broadcast,
    Dept(Department),
}

impl Target {
    pub fn label(&self) -> &'static str {
        match self {
            Target::Broadcast => "ALL",
            Target::Dept(dept) => dept.label(),
        }
    }

    /// Parse a channel/target label; accepts "ALL" or "BROADCAST" for the
    /// open channel, otherwise a department label.
    pub fn parse(input: &str) -> Option<Target> {
        let needle = input.trim();
        if needle.eq_ignore_ascii_case("ALL") || needle.eq_ignore_ascii_case("BROADCAST") {
            return Some(Target::Broadcast);
        }
        Department::parse(needle).map(Target::Dept)
    }

    pub fn is_broadcast(&self) -> bool {
        matches!(self, Target::Broadcast)
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_department() {
        assert_eq!(Department::ALL.len(), 6);
        for dept in Department::ALL {
            assert!(!dept.label().is_empty());
        }
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(Department::parse("STAGE"), Some(Department::Stage));
        assert_eq!(Department::parse("stage"), Some(Department::Stage));
        assert_eq!(Department::parse(" hospitality "), Some(Department::Hospitality));
        assert_eq!(Department::parse("CATERING"), None);
    }

    #[test]
    fn test_target_parse() {
        assert_eq!(Target::parse("ALL"), Some(Target::Broadcast));
        assert_eq!(Target::parse("broadcast"), Some(Target::Broadcast));
        assert_eq!(Target::parse("TECH"), Some(Target::Dept(Department::Tech)));
        assert_eq!(Target::parse("nowhere"), None);
    }

    #[test]
    fn test_only_admin_is_admin() {
        let admins: Vec<_> = Department::ALL.iter().filter(|d| d.is_admin()).collect();
        assert_eq!(admins, vec![&Department::Admin]);
    }
}
