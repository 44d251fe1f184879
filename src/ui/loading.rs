//! Loading screen - fades "Loading..." in and out, then opens the pending scene.

use bevy::prelude::*;

use super::plugin::screen_root;
use crate::core::{despawn_all, GameScene, PendingScene, SceneLoadRequest};
use crate::transition::{Transition, TransitionAction, TransitionConfig};

#[derive(Component)]
struct LoadingUi;

pub fn setup_loading_systems(app: &mut App) {
    app.add_systems(OnEnter(GameScene::Loading), spawn_loading_screen)
        .add_systems(OnExit(GameScene::Loading), despawn_all::<LoadingUi>);
}

fn spawn_loading_screen(
    mut commands: Commands,
    config: Res<TransitionConfig>,
    pending: Res<PendingScene>,
) {
    info!("Loading screen, next scene {:?}", pending.0);

    commands.spawn((Camera2d, LoadingUi));

    let load = TransitionAction::LoadScene(SceneLoadRequest::direct(pending.0));
    commands
        .spawn((screen_root(Color::BLACK), LoadingUi))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Loading..."),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                // Starts invisible and fades in
                TextColor(Color::WHITE.with_alpha(0.0)),
                Transition::new(config.loading.then(load)),
            ));
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::*;

    #[test]
    fn loading_hands_over_to_pending_scene() {
        let mut app = screen_app();
        setup_loading_systems(&mut app);
        app.world_mut().send_event(SceneLoadRequest::via_loading(GameScene::Win));

        let scenes = run_frames(&mut app, 5);

        assert!(scenes.contains(&GameScene::Loading));
        assert_eq!(scenes.last(), Some(&GameScene::Win));
        assert_eq!(app.world().resource::<PendingScene>().0, GameScene::Win);
    }
}
