// Taskbar Library - Public API

// Re-export error types
pub mod error;
pub use error::{Result, TaskbarError};

// Module declarations
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::Config;

// Initialize logging. Output goes to stderr; stdout carries the bar.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();
}
