//! Login session lifecycle
//!
//! At most one identity is active per process instance. The logged-out
//! state is explicit: callers get an `Option`, never a dangling identity.

use crate::error::AuthError;
use crate::models::{Department, Identity};

/// The shared access key used when none is configured
pub const DEFAULT_ACCESS_KEY: &str = "wlfadmin";

/// Single-operator session gate
#[derive(Debug)]
pub struct Session {
    current: Option<Identity>,
    access_key: String,
}

impl Session {
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            current: None,
            access_key: access_key.into(),
        }
    }

    /// Validate the login form and install a fresh identity. A login while
    /// already logged in replaces the previous identity.
    pub fn login(
        &mut self,
        display_name: &str,
        department: Department,
        access_key: &str,
    ) -> std::result::Result<Identity, AuthError> {
        let name = display_name.trim();
        if name.is_empty() {
            return Err(AuthError::EmptyName);
        }
        if access_key != self.access_key {
            tracing::warn!(dept = %department, "login rejected: bad access key");
            return Err(AuthError::InvalidKey);
        }

        let identity = Identity::new(name.to_string(), department);
        tracing::info!(name = %identity.display_name, dept = %department, "operator logged in");
        self.current = Some(identity.clone());
        Ok(identity)
    }

    /// Clear the session, returning the identity that was active
    pub fn logout(&mut self) -> Option<Identity> {
        let identity = self.current.take();
        if let Some(ref id) = identity {
            tracing::info!(name = %id.display_name, dept = %id.department, "operator logged out");
        }
        identity
    }

    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_ACCESS_KEY)
    }
}
