//! Error types for Crewdeck Core

use thiserror::Error;

/// Login failures surfaced back to the login form. Non-fatal and
/// re-enterable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("display name must not be empty")]
    EmptyName,

    #[error("invalid access key")]
    InvalidKey,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("no operator is logged in")]
    NotLoggedIn,

    #[error("permission denied: {0}")]
    PermissionDenied(String),
}

pub type Result<T> = std::result::Result<T, Error>;
