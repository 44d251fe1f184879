//! Pause overlay shown over the game.

use bevy::prelude::*;

use super::menu::{spawn_menu_button, MenuButton};
use super::plugin::{screen_root, screen_text};
use crate::core::{despawn_all, PauseState};

/// Marker for pause menu UI entities.
#[derive(Component)]
struct PauseMenuUi;

pub fn setup_pause_systems(app: &mut App) {
    app.add_systems(OnEnter(PauseState::Paused), spawn_pause_menu)
        .add_systems(OnExit(PauseState::Paused), despawn_all::<PauseMenuUi>);
}

fn spawn_pause_menu(mut commands: Commands) {
    commands
        .spawn((
            screen_root(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            GlobalZIndex(5),
            PauseMenuUi,
        ))
        .with_children(|parent| {
            parent.spawn(screen_text("PAUSED", 48.0, Color::srgb(0.8, 0.8, 0.85), 40.0));

            spawn_menu_button(parent, "Resume", MenuButton::Resume);
            spawn_menu_button(parent, "Main Menu", MenuButton::MainMenu);
        });
}
