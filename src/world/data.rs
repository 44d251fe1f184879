//! Level data structures and RON loading.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::triggers::HintType;
use crate::core::{load_ron_file, DataLoadError};

const LEVELS_DIR: &str = "assets/data/levels";

/// An axis-aligned wall slab, positioned on the floor.
#[derive(Debug, Clone, Deserialize)]
pub struct WallDef {
    /// Center on the floor plane (x, z)
    pub center: (f32, f32),
    /// Extent along x and z
    pub size: (f32, f32),
}

/// A point light in the level.
#[derive(Debug, Clone, Deserialize)]
pub struct LightDef {
    pub position: (f32, f32, f32),
    pub intensity: f32,
    #[serde(default = "default_light_color")]
    pub color: (f32, f32, f32),
    #[serde(default = "default_light_range")]
    pub range: f32,
}

fn default_light_color() -> (f32, f32, f32) {
    (1.0, 0.7, 0.4)
}

fn default_light_range() -> f32 {
    8.0
}

/// What a trigger volume does when the player enters it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum TriggerKind {
    /// Show a hint on the HUD.
    Tip {
        hint: HintType,
        #[serde(default = "default_show_once")]
        show_once: bool,
        /// Overrides the configured tip display time
        #[serde(default)]
        display: Option<f32>,
    },
    /// The way out; press the interact key inside to win.
    Exit,
    /// Touching it kills the player.
    Lethal,
}

fn default_show_once() -> bool {
    true
}

/// A box-shaped trigger volume.
#[derive(Debug, Clone, Deserialize)]
pub struct TriggerDef {
    pub kind: TriggerKind,
    pub center: (f32, f32, f32),
    /// Full size along each axis
    pub size: (f32, f32, f32),
}

/// Complete level definition loaded from RON file.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelDefinition {
    pub name: String,
    /// Floor extent along x and z, centered on the origin
    pub floor_size: (f32, f32),
    pub wall_height: f32,
    #[serde(default)]
    pub walls: Vec<WallDef>,
    #[serde(default)]
    pub lights: Vec<LightDef>,
    pub player_spawn: (f32, f32, f32),
    #[serde(default)]
    pub triggers: Vec<TriggerDef>,
}

impl LevelDefinition {
    /// Check sizes and trigger settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.floor_size.0 <= 0.0 || self.floor_size.1 <= 0.0 {
            return Err(format!("floor size must be positive, got {:?}", self.floor_size));
        }
        if self.wall_height <= 0.0 {
            return Err(format!("wall height must be positive, got {}", self.wall_height));
        }
        for (i, wall) in self.walls.iter().enumerate() {
            if wall.size.0 <= 0.0 || wall.size.1 <= 0.0 {
                return Err(format!("wall {i} has non-positive size {:?}", wall.size));
            }
        }
        for (i, trigger) in self.triggers.iter().enumerate() {
            let (x, y, z) = trigger.size;
            if x <= 0.0 || y <= 0.0 || z <= 0.0 {
                return Err(format!("trigger {i} has non-positive size {:?}", trigger.size));
            }
            if let TriggerKind::Tip { display: Some(display), .. } = trigger.kind {
                if !display.is_finite() || display < 0.0 {
                    return Err(format!("trigger {i} has invalid display time {display}"));
                }
            }
        }
        Ok(())
    }

    pub fn spawn_point(&self) -> Vec3 {
        Vec3::new(self.player_spawn.0, self.player_spawn.1, self.player_spawn.2)
    }

    /// Load and validate one level file.
    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        let level: Self = load_ron_file(path)?;
        level.validate().map_err(|details| DataLoadError::Invalid {
            path: path.display().to_string(),
            details,
        })?;
        Ok(level)
    }
}

/// Resource holding all loaded level definitions, keyed by file stem.
#[derive(Resource, Default)]
pub struct LevelRegistry {
    pub levels: HashMap<String, LevelDefinition>,
}

impl LevelRegistry {
    /// Get a level definition by name.
    pub fn get(&self, name: &str) -> Option<&LevelDefinition> {
        self.levels.get(name)
    }
}

/// Name of the level to build when the game scene starts.
#[derive(Resource)]
pub struct CurrentLevel {
    pub name: String,
}

impl Default for CurrentLevel {
    fn default() -> Self {
        Self {
            name: "house".to_string(),
        }
    }
}

/// Load all level definitions from the assets/data/levels/ directory.
pub fn load_level_definitions(mut registry: ResMut<LevelRegistry>) {
    let levels_dir = Path::new(LEVELS_DIR);

    let Ok(entries) = fs::read_dir(levels_dir) else {
        warn!("Failed to read level directory {:?}", levels_dir);
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "ron") {
            continue;
        }

        let Some(key) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
            continue;
        };

        match LevelDefinition::load(&path) {
            Ok(level) => {
                info!("Loaded level definition: {} ({})", level.name, key);
                registry.levels.insert(key, level);
            }
            Err(e) => error!("{}", e),
        }
    }

    info!("Loaded {} level definitions", registry.levels.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_house_level_is_valid() {
        let level = LevelDefinition::load(&Path::new(LEVELS_DIR).join("house.ron")).unwrap();

        assert!(level.triggers.iter().any(|t| t.kind == TriggerKind::Exit));
        assert!(level
            .triggers
            .iter()
            .any(|t| matches!(t.kind, TriggerKind::Tip { hint: HintType::Flashlight, .. })));
    }

    #[test]
    fn tip_trigger_defaults_to_show_once() {
        let trigger: TriggerDef = ron::from_str(
            "(kind: Tip(hint: Sprint), center: (0.0, 1.0, 0.0), size: (2.0, 2.0, 2.0))",
        )
        .unwrap();

        assert_eq!(
            trigger.kind,
            TriggerKind::Tip { hint: HintType::Sprint, show_once: true, display: None }
        );
    }

    #[test]
    fn flat_trigger_is_rejected() {
        let level: LevelDefinition = ron::from_str(
            "(
                name: \"Broken\",
                floor_size: (10.0, 10.0),
                wall_height: 3.0,
                player_spawn: (0.0, 1.0, 0.0),
                triggers: [(kind: Lethal, center: (0.0, 0.0, 0.0), size: (1.0, 0.0, 1.0))],
            )",
        )
        .unwrap();

        let err = level.validate().unwrap_err();
        assert!(err.contains("trigger 0"));
    }
}
