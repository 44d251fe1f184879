//! Scene state definitions that control the overall flow of the game.
//!
//! Each screen of the game is one `GameScene` variant. Systems for a screen
//! only run while its scene is active, and its entities are despawned on exit.

use bevy::prelude::*;
use serde::Deserialize;

/// Main scene states, in build order.
///
/// The game flows through them like this:
/// - Two splash screens play back to back
/// - `Menu` waits for any key
/// - `Loading` sits between most scene changes
/// - `Game` is the playable level
/// - `Death` -> `GameOver` when the player is caught
/// - `Win` when the player reaches the exit
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default, Deserialize)]
pub enum GameScene {
    /// Studio splash screen
    #[default]
    SplashScreenVini,
    /// Game title splash screen
    SplashScreenGame,
    /// Start screen
    Menu,
    /// Active gameplay
    Game,
    /// Death sequence
    Death,
    /// Retry / menu choice after death
    GameOver,
    /// Player escaped
    Win,
    /// Intermediate loading screen
    Loading,
}

/// Pause sub-state - only exists while `GameScene::Game` is active.
#[derive(SubStates, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[source(GameScene = GameScene::Game)]
pub enum PauseState {
    /// Normal gameplay
    #[default]
    Running,
    /// Time and audio are frozen, pause menu is shown
    Paused,
}
