//! Rendering plugin - the house's dark, foggy atmosphere.
//!
//! Fog lives on the player camera (see `spawn_player`); ambient light is a
//! global resource, so it is swapped in for the game scene and restored after.

use bevy::prelude::*;

use super::visual_config::{load_visual_config, VisualConfig};
use crate::core::GameScene;

/// Rendering plugin - loads visual config and applies scene lighting.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VisualConfig>()
            .insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, load_visual_config)
            .add_systems(OnEnter(GameScene::Game), apply_game_atmosphere)
            .add_systems(OnExit(GameScene::Game), restore_default_atmosphere);
    }
}

/// Dim ambient light for the house.
fn apply_game_atmosphere(mut commands: Commands, config: Res<VisualConfig>) {
    commands.insert_resource(AmbientLight {
        color: config.ambient_color(),
        brightness: config.ambient_brightness,
    });
}

fn restore_default_atmosphere(mut commands: Commands) {
    commands.insert_resource(AmbientLight::default());
}
