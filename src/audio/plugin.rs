//! Sound effect plugin.
//!
//! Sounds are fire-and-forget on kira's main channel. The whole channel is
//! paused together with the game.

use bevy::prelude::*;
use bevy_kira_audio::{Audio, AudioControl};

use crate::core::PauseState;

/// Asset paths of every sound effect.
pub mod sfx {
    pub const START_GAME: &str = "audio/start_game.ogg";
    pub const CLICK: &str = "audio/click.ogg";
    pub const FLASHLIGHT_ON: &str = "audio/flashlight_on.ogg";
    pub const FLASHLIGHT_OFF: &str = "audio/flashlight_off.ogg";
    pub const DEATH_FIRST: &str = "audio/death_1.ogg";
    pub const DEATH_SECOND: &str = "audio/death_2.ogg";
    pub const MONSTER_BITE: &str = "audio/monster_bite.ogg";
    pub const CAR_DOOR: &str = "audio/car_door.ogg";
}

/// Sound effect plugin - pauses and resumes audio with the game.
pub struct SfxPlugin;

impl Plugin for SfxPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(PauseState::Paused), pause_audio)
            .add_systems(OnExit(PauseState::Paused), resume_audio);
    }
}

/// Play a sound effect once.
pub fn play_sfx(audio: &Audio, asset_server: &AssetServer, path: &'static str) {
    audio.play(asset_server.load(path));
}

fn pause_audio(audio: Res<Audio>) {
    audio.pause();
}

fn resume_audio(audio: Res<Audio>) {
    audio.resume();
}
