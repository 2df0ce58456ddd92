//! Shell configuration
//!
//! Nothing is persisted; the only knob is the shared access key, taken
//! from the environment when set.

use crewdeck_core::DEFAULT_ACCESS_KEY;

pub const ACCESS_KEY_ENV: &str = "CREWDECK_ACCESS_KEY";

#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub access_key: String,
}

impl ShellConfig {
    pub fn from_env() -> Self {
        let access_key = std::env::var(ACCESS_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ACCESS_KEY.to_string());
        Self { access_key }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            access_key: DEFAULT_ACCESS_KEY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_builtin_key() {
        assert_eq!(ShellConfig::default().access_key, DEFAULT_ACCESS_KEY);
    }

    #[test]
    fn test_env_override_wins() {
        std::env::set_var(ACCESS_KEY_ENV, "show-night");
        assert_eq!(ShellConfig::from_env().access_key, "show-night");

        std::env::set_var(ACCESS_KEY_ENV, "   ");
        assert_eq!(ShellConfig::from_env().access_key, DEFAULT_ACCESS_KEY);

        std::env::remove_var(ACCESS_KEY_ENV);
        assert_eq!(ShellConfig::from_env().access_key, DEFAULT_ACCESS_KEY);
    }
}
