//! Presence registry for the fixed department set
//!
//! A total map over `Department::ALL`: every department always has an
//! entry, never partial.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::Department;

#[derive(Debug, Clone, Serialize)]
pub struct PresenceRegistry {
    online: BTreeMap<Department, bool>,
}

impl PresenceRegistry {
    /// All departments offline
    pub fn new() -> Self {
        let online = Department::ALL.iter().map(|d| (*d, false)).collect();
        Self { online }
    }

    /// Event-day defaults: admin, stage, tech and security desks staffed
    pub fn seeded() -> Self {
        let mut registry = Self::new();
        registry.set_online(Department::Admin, true);
        registry.set_online(Department::Stage, true);
        registry.set_online(Department::Tech, true);
        registry.set_online(Department::Security, true);
        registry
    }

    pub fn set_online(&mut self, dept: Department, online: bool) {
        tracing::debug!(dept = %dept, online, "presence updated");
        self.online.insert(dept, online);
    }

    pub fn is_online(&self, dept: Department) -> bool {
        self.online.get(&dept).copied().unwrap_or(false)
    }

    pub fn online_count(&self) -> usize {
        self.online.values().filter(|v| **v).count()
    }

    pub fn total(&self) -> usize {
        self.online.len()
    }

    /// Entries in canonical department order
    pub fn iter(&self) -> impl Iterator<Item = (Department, bool)> + '_ {
        self.online.iter().map(|(d, v)| (*d, *v))
    }
}

impl Default for PresenceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_total() {
        let registry = PresenceRegistry::new();
        assert_eq!(registry.total(), Department::ALL.len());
        for dept in Department::ALL {
            assert!(!registry.is_online(dept));
        }
    }

    #[test]
    fn test_seeded_defaults() {
        let registry = PresenceRegistry::seeded();
        assert!(registry.is_online(Department::Admin));
        assert!(!registry.is_online(Department::Media));
        assert!(registry.is_online(Department::Stage));
        assert!(registry.is_online(Department::Tech));
        assert!(!registry.is_online(Department::Hospitality));
        assert!(registry.is_online(Department::Security));
        assert_eq!(registry.online_count(), 4);
    }

    #[test]
    fn test_set_online_roundtrip() {
        let mut registry = PresenceRegistry::new();
        registry.set_online(Department::Media, true);
        assert!(registry.is_online(Department::Media));
        registry.set_online(Department::Media, false);
        assert!(!registry.is_online(Department::Media));
        assert_eq!(registry.total(), Department::ALL.len());
    }

    #[test]
    fn test_iter_in_canonical_order() {
        let registry = PresenceRegistry::new();
        let order: Vec<Department> = registry.iter().map(|(d, _)| d).collect();
        assert_eq!(order, Department::ALL.to_vec());
    }
}
