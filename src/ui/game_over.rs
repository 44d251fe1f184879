//! Game over screen - retry or go back to the start screen.

use bevy::prelude::*;

use super::menu::{spawn_menu_button, MenuButton};
use super::plugin::{screen_root, screen_text, unlock_cursor};
use crate::core::{despawn_all, GameScene};

/// Marker for game over UI entities.
#[derive(Component)]
struct GameOverUi;

pub fn setup_game_over_systems(app: &mut App) {
    app.add_systems(OnEnter(GameScene::GameOver), (spawn_game_over, unlock_cursor))
        .add_systems(OnExit(GameScene::GameOver), despawn_all::<GameOverUi>);
}

fn spawn_game_over(mut commands: Commands) {
    commands.spawn((Camera2d, GameOverUi));

    commands
        .spawn((screen_root(Color::srgba(0.1, 0.0, 0.0, 0.95)), GameOverUi))
        .with_children(|parent| {
            parent.spawn(screen_text("GAME OVER", 72.0, Color::srgb(0.8, 0.15, 0.15), 60.0));

            spawn_menu_button(parent, "Retry", MenuButton::Retry);
            spawn_menu_button(parent, "Main Menu", MenuButton::MainMenu);
        });
}
