//! World plugin - level loading, building, and trigger volumes.

use bevy::prelude::*;

use crate::core::{GameScene, PauseState};
use crate::player::{spawn_player, Player, PlayerConfig};
use crate::rendering::VisualConfig;

use super::builder::{build_level_from_data, LevelGeometry};
use super::data::{load_level_definitions, CurrentLevel, LevelRegistry};
use super::triggers::{handle_trigger_events, use_exit};

/// World plugin - handles level loading and world setup.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelRegistry>()
            .init_resource::<CurrentLevel>()
            .add_systems(Startup, load_level_definitions)
            .add_systems(OnEnter(GameScene::Game), setup_level)
            .add_systems(OnExit(GameScene::Game), cleanup_level)
            .add_systems(
                Update,
                (handle_trigger_events, use_exit)
                    .chain()
                    .run_if(in_state(PauseState::Running)),
            );
    }
}

/// Set up the level from data.
pub fn setup_level(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    level_registry: Res<LevelRegistry>,
    current_level: Res<CurrentLevel>,
    player_config: Res<PlayerConfig>,
    visual_config: Res<VisualConfig>,
) {
    let Some(level) = level_registry.get(&current_level.name) else {
        error!("Level '{}' not found in registry!", current_level.name);
        return;
    };

    info!("Building level: {}", level.name);

    let player_pos = build_level_from_data(&mut commands, &mut meshes, &mut materials, level);

    spawn_player(&mut commands, player_pos, &player_config, &visual_config);
}

/// Clean up level entities when leaving the game scene.
fn cleanup_level(
    mut commands: Commands,
    level_query: Query<Entity, With<LevelGeometry>>,
    player_query: Query<Entity, With<Player>>,
) {
    for entity in level_query.iter().chain(player_query.iter()) {
        commands.entity(entity).despawn_recursive();
    }
}
