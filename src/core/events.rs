//! Global events used for cross-system communication.
//!
//! Screens and trigger volumes never switch scenes themselves. They send a
//! `SceneLoadRequest` and the scene loader applies it, so a fade can finish
//! and hand over to the loader without knowing how scenes are swapped.

use bevy::prelude::*;
use serde::Deserialize;

use super::states::GameScene;

/// How a requested scene is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum SceneRoute {
    /// Switch straight to the scene.
    Direct,
    /// Show the loading screen first, then switch.
    #[default]
    ViaLoading,
}

/// Sent to change the active scene.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneLoadRequest {
    /// Scene to end up in
    pub scene: GameScene,
    /// Whether to pass through the loading screen
    pub route: SceneRoute,
}

impl SceneLoadRequest {
    pub fn direct(scene: GameScene) -> Self {
        Self { scene, route: SceneRoute::Direct }
    }

    pub fn via_loading(scene: GameScene) -> Self {
        Self { scene, route: SceneRoute::ViaLoading }
    }
}
