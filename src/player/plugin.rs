//! Player plugin - movement, camera, and flashlight systems.

use bevy::prelude::*;

use super::components::*;
use super::flashlight::toggle_flashlight;
use super::movement;
use crate::core::PauseState;

/// Player plugin - handles player movement, camera, and flashlight.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerConfig>();

        movement::setup_movement_systems(app);

        app.add_systems(
            Update,
            toggle_flashlight.run_if(in_state(PauseState::Running)),
        );
    }
}
