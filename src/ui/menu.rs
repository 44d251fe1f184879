//! Menu buttons shared by the pause and game over screens.

use bevy::prelude::*;
use bevy_kira_audio::Audio;

use crate::audio::{play_sfx, sfx};
use crate::core::{GameScene, PauseState, SceneLoadRequest};

const BUTTON_IDLE: Color = Color::srgb(0.12, 0.08, 0.08);
const BUTTON_HOVERED: Color = Color::srgb(0.22, 0.12, 0.12);
const BUTTON_PRESSED: Color = Color::srgb(0.35, 0.15, 0.15);

/// Marker for menu buttons.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Resume,
    MainMenu,
    Retry,
}

pub fn setup_menu_button_systems(app: &mut App) {
    app.add_systems(Update, menu_button_input);
}

/// Helper to spawn a menu button.
pub fn spawn_menu_button(parent: &mut ChildBuilder, text: &str, button: MenuButton) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(220.0),
                height: Val::Px(50.0),
                margin: UiRect::all(Val::Px(10.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_IDLE),
            button,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(text),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.75, 0.75)),
            ));
        });
}

/// Handle menu button interactions on whichever screen is showing.
fn menu_button_input(
    mut interaction_query: Query<
        (&Interaction, &MenuButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut next_pause: ResMut<NextState<PauseState>>,
    mut scene_requests: EventWriter<SceneLoadRequest>,
    audio: Res<Audio>,
    asset_server: Res<AssetServer>,
) {
    for (interaction, button, mut bg_color) in interaction_query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                *bg_color = BUTTON_PRESSED.into();
                play_sfx(&audio, &asset_server, sfx::CLICK);
                match button {
                    MenuButton::Resume => {
                        next_pause.set(PauseState::Running);
                    }
                    MenuButton::MainMenu => {
                        scene_requests.send(SceneLoadRequest::via_loading(GameScene::Menu));
                    }
                    MenuButton::Retry => {
                        scene_requests.send(SceneLoadRequest::via_loading(GameScene::Game));
                    }
                }
            }
            Interaction::Hovered => {
                *bg_color = BUTTON_HOVERED.into();
            }
            Interaction::None => {
                *bg_color = BUTTON_IDLE.into();
            }
        }
    }
}
