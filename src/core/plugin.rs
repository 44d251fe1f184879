//! Core plugin that sets up scene states, scene loading, and pausing.

use bevy::prelude::*;

use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Scene states (SplashScreenVini, Menu, Game, etc.) and the pause sub-state
/// - The `SceneLoadRequest` event and the loader that applies it
/// - Pause toggling and virtual time freezing
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize scene states
            .init_state::<GameScene>()
            .add_sub_state::<PauseState>()

            // Scene loading
            .init_resource::<PendingScene>()
            .add_event::<SceneLoadRequest>()
            .add_systems(Update, apply_scene_requests.in_set(SceneLoaderSet))

            // Pause/unpause with P or Escape
            .add_systems(
                Update,
                handle_pause_input.run_if(in_state(GameScene::Game)),
            )
            .add_systems(OnEnter(PauseState::Paused), freeze_time)
            .add_systems(OnExit(PauseState::Paused), resume_time);
    }
}

/// System set containing the scene loader, for ordering senders before it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneLoaderSet;

/// Scene that the loading screen hands over to when it finishes.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingScene(pub GameScene);

impl Default for PendingScene {
    fn default() -> Self {
        Self(GameScene::Menu)
    }
}

/// Apply the most recent scene load request of this frame.
pub fn apply_scene_requests(
    mut requests: EventReader<SceneLoadRequest>,
    mut pending: ResMut<PendingScene>,
    mut next_scene: ResMut<NextState<GameScene>>,
) {
    let Some(request) = requests.read().last().copied() else {
        return;
    };

    match request.route {
        SceneRoute::Direct => {
            info!("Loading scene {:?}", request.scene);
            next_scene.set(request.scene);
        }
        SceneRoute::ViaLoading => {
            info!("Loading scene {:?} through the loading screen", request.scene);
            pending.0 = request.scene;
            next_scene.set(GameScene::Loading);
        }
    }
}

/// Handle P / Escape to pause and unpause the game.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current: Res<State<PauseState>>,
    mut next: ResMut<NextState<PauseState>>,
) {
    if keyboard.any_just_pressed([KeyCode::KeyP, KeyCode::Escape]) {
        match current.get() {
            PauseState::Running => next.set(PauseState::Paused),
            PauseState::Paused => next.set(PauseState::Running),
        }
    }
}

/// Stop virtual time so every `Time`-driven system sees a zero delta.
fn freeze_time(mut time: ResMut<Time<Virtual>>) {
    time.pause();
}

fn resume_time(mut time: ResMut<Time<Virtual>>) {
    time.unpause();
}

/// Despawn every entity carrying marker `T`.
///
/// Screens register this on `OnExit` for their own marker.
pub fn despawn_all<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .add_plugins(CorePlugin);
        app.update();
        app
    }

    fn current_scene(app: &App) -> GameScene {
        *app.world().resource::<State<GameScene>>().get()
    }

    #[test]
    fn starts_on_first_splash_screen() {
        let app = test_app();
        assert_eq!(current_scene(&app), GameScene::SplashScreenVini);
        assert_eq!(app.world().resource::<PendingScene>().0, GameScene::Menu);
    }

    #[test]
    fn direct_request_switches_scene() {
        let mut app = test_app();
        app.world_mut().send_event(SceneLoadRequest::direct(GameScene::Win));
        app.update();
        app.update();

        assert_eq!(current_scene(&app), GameScene::Win);
    }

    #[test]
    fn loading_route_remembers_target() {
        let mut app = test_app();
        app.world_mut()
            .send_event(SceneLoadRequest::via_loading(GameScene::GameOver));
        app.update();
        app.update();

        assert_eq!(current_scene(&app), GameScene::Loading);
        assert_eq!(app.world().resource::<PendingScene>().0, GameScene::GameOver);
    }

    #[test]
    fn last_request_in_a_frame_wins() {
        let mut app = test_app();
        app.world_mut().send_event(SceneLoadRequest::direct(GameScene::Win));
        app.world_mut().send_event(SceneLoadRequest::direct(GameScene::Death));
        app.update();
        app.update();

        assert_eq!(current_scene(&app), GameScene::Death);
    }
}
