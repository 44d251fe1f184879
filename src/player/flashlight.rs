//! Flashlight toggling.

use bevy::prelude::*;
use bevy_kira_audio::Audio;

use super::components::Flashlight;
use crate::audio::{play_sfx, sfx};

/// Toggle the flashlight with F, with a click sound for each state.
pub fn toggle_flashlight(
    keyboard: Res<ButtonInput<KeyCode>>,
    audio: Res<Audio>,
    asset_server: Res<AssetServer>,
    mut query: Query<(&mut Flashlight, &mut SpotLight)>,
) {
    if !keyboard.just_pressed(KeyCode::KeyF) {
        return;
    }

    for (mut flashlight, mut light) in query.iter_mut() {
        let on = flashlight.toggle();
        light.intensity = flashlight.current_intensity();

        let sound = if on { sfx::FLASHLIGHT_ON } else { sfx::FLASHLIGHT_OFF };
        play_sfx(&audio, &asset_server, sound);
    }
}
