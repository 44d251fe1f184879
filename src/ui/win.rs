//! Win screen - the player made it out to the car.

use bevy::prelude::*;
use bevy_kira_audio::Audio;

use super::plugin::{any_input_pressed, screen_root, screen_text, unlock_cursor};
use crate::audio::{play_sfx, sfx};
use crate::core::{despawn_all, GameScene, SceneLoadRequest};

#[derive(Component)]
struct WinUi;

/// Set once the player has asked to leave, so the request is sent only once.
#[derive(Resource, Default)]
struct LeavingWinScreen(bool);

pub fn setup_win_systems(app: &mut App) {
    app.init_resource::<LeavingWinScreen>()
        .add_systems(OnEnter(GameScene::Win), (spawn_win_screen, unlock_cursor))
        .add_systems(Update, win_screen_input.run_if(in_state(GameScene::Win)))
        .add_systems(OnExit(GameScene::Win), despawn_all::<WinUi>);
}

fn spawn_win_screen(
    mut commands: Commands,
    mut leaving: ResMut<LeavingWinScreen>,
    audio: Res<Audio>,
    asset_server: Res<AssetServer>,
) {
    leaving.0 = false;
    play_sfx(&audio, &asset_server, sfx::CAR_DOOR);

    commands.spawn((Camera2d, WinUi));

    commands
        .spawn((screen_root(Color::BLACK), WinUi))
        .with_children(|parent| {
            parent.spawn(screen_text("YOU ESCAPED", 72.0, Color::srgb(0.8, 0.8, 0.75), 40.0));
            parent.spawn(screen_text(
                "Press any key to return to the menu",
                22.0,
                Color::srgb(0.5, 0.5, 0.5),
                0.0,
            ));
        });
}

fn win_screen_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut leaving: ResMut<LeavingWinScreen>,
    mut scene_requests: EventWriter<SceneLoadRequest>,
) {
    if leaving.0 || !any_input_pressed(&keyboard, &mouse) {
        return;
    }
    leaving.0 = true;
    scene_requests.send(SceneLoadRequest::via_loading(GameScene::Menu));
}
