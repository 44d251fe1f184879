//! Rendering module - fog, ambient light and clear color.

mod plugin;
mod visual_config;

pub use plugin::RenderingPlugin;
pub use visual_config::VisualConfig;
