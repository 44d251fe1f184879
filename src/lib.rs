//! Sanguinary Spirits - a small first-person horror game in Bevy.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Scene states, scene loading requests, pause sub-state
//! - **Transition**: Timed fade-in / hold / fade-out sequences on UI surfaces
//! - **Player**: First-person movement, camera, flashlight
//! - **World**: Level data, trigger volumes (tips, exit, lethal zones)
//! - **Rendering**: Fog and ambient light configuration
//! - **Audio**: One-shot sound effects
//! - **UI**: Splash, start, loading, pause, death, game over, win screens and the HUD

pub mod audio;
pub mod core;
pub mod player;
pub mod rendering;
pub mod transition;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct SanguinaryPlugin;

impl Plugin for SanguinaryPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Fade sequencing used by every screen
            .add_plugins(transition::TransitionPlugin)

            // Sound effects
            .add_plugins(audio::SfxPlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // Rendering systems
            .add_plugins(rendering::RenderingPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
