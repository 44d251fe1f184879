//! Splash screens shown before the start screen.
//!
//! Each one lifts a black overlay off its logo, holds, drops the overlay back
//! and hands over to the next scene.

use bevy::prelude::*;

use super::plugin::{screen_overlay, screen_root, screen_text};
use crate::core::{despawn_all, GameScene, SceneLoadRequest};
use crate::transition::{SplashTimings, Transition, TransitionAction, TransitionConfig};

#[derive(Component)]
struct SplashUi;

pub fn setup_splash_systems(app: &mut App) {
    app.add_systems(OnEnter(GameScene::SplashScreenVini), spawn_studio_splash)
        .add_systems(OnExit(GameScene::SplashScreenVini), despawn_all::<SplashUi>)
        .add_systems(OnEnter(GameScene::SplashScreenGame), spawn_title_splash)
        .add_systems(OnExit(GameScene::SplashScreenGame), despawn_all::<SplashUi>);
}

fn spawn_studio_splash(mut commands: Commands, config: Res<TransitionConfig>) {
    spawn_splash(
        &mut commands,
        ("VINI", "games"),
        config.splash_vini,
        GameScene::SplashScreenGame,
    );
}

fn spawn_title_splash(mut commands: Commands, config: Res<TransitionConfig>) {
    spawn_splash(
        &mut commands,
        ("SANGUINARY SPIRITS", "a horror game"),
        config.splash_game,
        GameScene::Menu,
    );
}

fn spawn_splash(
    commands: &mut Commands,
    (title, subtitle): (&str, &str),
    timings: SplashTimings,
    next: GameScene,
) {
    commands.spawn((Camera2d, SplashUi));

    commands
        .spawn((screen_root(Color::BLACK), SplashUi))
        .with_children(|parent| {
            parent.spawn(screen_text(title, 72.0, Color::srgb(0.75, 0.1, 0.1), 16.0));
            parent.spawn(screen_text(subtitle, 24.0, Color::srgb(0.6, 0.6, 0.6), 0.0));
        });

    let request = SceneLoadRequest {
        scene: next,
        route: timings.route,
    };
    commands.spawn((
        screen_overlay(1.0),
        Transition::inverted(timings.fade.then(TransitionAction::LoadScene(request))),
        SplashUi,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::loading::setup_loading_systems;
    use crate::ui::test_support::*;

    #[test]
    fn splashes_lead_to_menu_through_loading() {
        let mut app = screen_app();
        setup_splash_systems(&mut app);
        setup_loading_systems(&mut app);

        let scenes = run_frames(&mut app, 8);

        let game_splash = scenes.iter().position(|s| *s == GameScene::SplashScreenGame);
        let loading = scenes.iter().position(|s| *s == GameScene::Loading);
        assert!(game_splash.is_some());
        assert!(loading > game_splash);
        assert_eq!(scenes.last(), Some(&GameScene::Menu));
    }

    #[test]
    fn splash_waits_for_its_fade() {
        let mut app = screen_app();
        app.world_mut().resource_mut::<TransitionConfig>().splash_vini.fade.hold = 1000.0;
        setup_splash_systems(&mut app);

        let scenes = run_frames(&mut app, 5);

        assert!(scenes.iter().all(|s| *s == GameScene::SplashScreenVini));
    }
}
