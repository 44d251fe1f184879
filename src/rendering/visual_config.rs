//! Visual configuration loaded from external RON file.
//!
//! Allows tweaking fog and lighting of the house without recompilation.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::{load_ron_file, DataLoadError};

const CONFIG_PATH: &str = "assets/data/rendering/visual_config.ron";

/// Visual configuration loaded from assets/data/rendering/visual_config.ron.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    pub fog_enabled: bool,
    pub fog_density: f32,
    pub fog_rgb: (f32, f32, f32),
    pub ambient_rgb: (f32, f32, f32),
    pub ambient_brightness: f32,
    pub clear_rgb: (f32, f32, f32),
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            fog_enabled: true,
            fog_density: 0.12,
            fog_rgb: (0.04, 0.04, 0.04),
            ambient_rgb: (0.04, 0.04, 0.04),
            ambient_brightness: 40.0,
            clear_rgb: (0.02, 0.02, 0.02),
        }
    }
}

impl VisualConfig {
    pub fn fog_color(&self) -> Color {
        Color::srgb(self.fog_rgb.0, self.fog_rgb.1, self.fog_rgb.2)
    }

    pub fn ambient_color(&self) -> Color {
        Color::srgb(self.ambient_rgb.0, self.ambient_rgb.1, self.ambient_rgb.2)
    }

    pub fn clear_color(&self) -> Color {
        Color::srgb(self.clear_rgb.0, self.clear_rgb.1, self.clear_rgb.2)
    }

    /// Fog density, or zero when fog is switched off.
    pub fn effective_fog_density(&self) -> f32 {
        if self.fog_enabled {
            self.fog_density
        } else {
            0.0
        }
    }

    /// Load visual config from RON file.
    pub fn load() -> Self {
        match load_ron_file(CONFIG_PATH) {
            Ok(config) => {
                info!("Loaded visual config from {}", CONFIG_PATH);
                config
            }
            Err(DataLoadError::FileNotFound(path)) => {
                warn!("Could not find {}. Using defaults.", path);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }
}

/// System to load visual config at startup.
pub fn load_visual_config(mut commands: Commands) {
    commands.insert_resource(VisualConfig::load());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_fog_has_no_density() {
        let config: VisualConfig = ron::from_str("(fog_enabled: false, fog_density: 0.5)").unwrap();

        assert_eq!(config.effective_fog_density(), 0.0);
        assert_eq!(config.ambient_brightness, VisualConfig::default().ambient_brightness);
    }
}
