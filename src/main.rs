//! Sanguinary Spirits - Entry Point
//!
//! A short first-person horror game: find the exit of the house before
//! something finds you.
//!
//! Controls:
//! - WASD: Move
//! - Mouse: Look around
//! - Shift: Sprint
//! - Ctrl: Crouch
//! - F: Flashlight
//! - E: Interact
//! - P / Escape: Pause/Unpause

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins, minus bevy_audio (kira owns audio)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Sanguinary Spirits".to_string(),
                        resolution: (1280.0, 720.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                .disable::<bevy::audio::AudioPlugin>(),
        )

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())

        // Audio
        .add_plugins(bevy_kira_audio::AudioPlugin)

        // Our game plugin
        .add_plugins(sanguinary_spirits::SanguinaryPlugin)

        .run();
}
