//! Start screen - any key or click starts the game.

use bevy::prelude::*;
use bevy_kira_audio::Audio;

use super::plugin::{any_input_pressed, screen_overlay, screen_root, screen_text, unlock_cursor};
use crate::audio::{play_sfx, sfx};
use crate::core::{despawn_all, GameScene, SceneLoadRequest};
use crate::transition::{FadeTimings, Transition, TransitionAction, TransitionConfig};

#[derive(Component)]
struct StartScreenUi;

/// Overlay that blacks out the start screen once the game is starting.
#[derive(Component, Default)]
struct StartOverlay {
    started: bool,
}

pub fn setup_start_screen_systems(app: &mut App) {
    app.add_systems(OnEnter(GameScene::Menu), (spawn_start_screen, unlock_cursor))
        .add_systems(Update, start_screen_input.run_if(in_state(GameScene::Menu)))
        .add_systems(OnExit(GameScene::Menu), despawn_all::<StartScreenUi>);
}

fn spawn_start_screen(mut commands: Commands) {
    commands.spawn((Camera2d, StartScreenUi));

    commands
        .spawn((screen_root(Color::srgb(0.03, 0.02, 0.02)), StartScreenUi))
        .with_children(|parent| {
            parent.spawn(screen_text(
                "SANGUINARY SPIRITS",
                80.0,
                Color::srgb(0.7, 0.08, 0.08),
                60.0,
            ));
            parent.spawn(screen_text(
                "Press any key to start",
                24.0,
                Color::srgb(0.55, 0.55, 0.55),
                0.0,
            ));
        });

    commands.spawn((screen_overlay(0.0), StartOverlay::default(), StartScreenUi));
}

/// Black out the screen, wait, then load the game.
///
/// The overlay and the timer run side by side: the overlay only fades, the
/// detached timer waits for the fade and then for the black screen.
fn start_screen_input(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    config: Res<TransitionConfig>,
    mut overlay_query: Query<(Entity, &mut StartOverlay)>,
    audio: Res<Audio>,
    asset_server: Res<AssetServer>,
) {
    if !any_input_pressed(&keyboard, &mouse) {
        return;
    }
    let Ok((overlay, mut state)) = overlay_query.get_single_mut() else {
        return;
    };
    if state.started {
        return;
    }
    state.started = true;

    info!("Starting game");
    play_sfx(&audio, &asset_server, sfx::START_GAME);

    commands.entity(overlay).insert(Transition::inverted(
        FadeTimings::new(0.0, 0.0, config.menu_fade_out).then(TransitionAction::None),
    ));

    let load = TransitionAction::LoadScene(SceneLoadRequest::via_loading(GameScene::Game));
    let wait = FadeTimings::hold_only(config.menu_wait).then(load);
    commands.spawn((
        Transition::detached(
            FadeTimings::hold_only(config.menu_fade_out)
                .then(TransitionAction::Then(Box::new(wait))),
        ),
        StartScreenUi,
    ));
}
