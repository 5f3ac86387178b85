// Command handlers module
pub mod completions;
pub mod config;
pub mod exec;
pub mod output;
pub mod render;
pub mod run;
pub mod version;

// Re-exports for cleaner imports
pub use render::execute as render;
pub use run::execute as run;
pub use version::execute as version;
