//! Crewdeck - single-device event coordination console
//!
//! Login gate, role-scoped back-channel chat with push-to-talk intercom,
//! department task board and status dashboard, driven from a line-oriented
//! operator loop.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod audio;
mod config;
mod shell;
mod state;
mod timer;
mod viewmodel;

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Crewdeck");

    // Initialize tokio runtime for the intercom expiry timer
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let _guard = runtime.enter();

    let config = config::ShellConfig::from_env();
    let state = state::AppState::new(&config);

    shell::run(state);
}
