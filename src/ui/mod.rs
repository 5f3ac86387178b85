// UI and rendering module

pub mod bar_render;

// Re-export commonly used items for cleaner imports
pub use bar_render::{glyph, render_bar, render_json, RenderStyle};
