//! Transition component - runs a sequence on the entity's own color.

use bevy::prelude::*;

use super::error::TransitionError;
use super::sequencer::{Phase, Progress, TransitionSequence, TransitionSequencer};
use super::surface::{FadeableSurface, Inverted};
use crate::core::SceneLoadRequest;

/// What to do once a transition has fully faded out.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionAction {
    /// Just drop the `Transition` component.
    None,
    /// Despawn the entity (and its children).
    Despawn,
    /// Ask the scene loader for another scene.
    LoadScene(SceneLoadRequest),
    /// Start another sequence on the same entity.
    Then(Box<TransitionSequence<TransitionAction>>),
}

/// Which value a transition writes its opacity to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceMode {
    /// The entity's `BackgroundColor`, `TextColor` or `ImageNode` alpha.
    #[default]
    Direct,
    /// Same surface, written as `1 - opacity` (black overlays).
    Inverted,
    /// Nothing visible; the sequence is only a timer.
    Detached,
}

enum TransitionState {
    Pending(TransitionSequence<TransitionAction>),
    Running(TransitionSequencer<TransitionAction>),
    Finished,
}

/// Drives a fade sequence on the entity it is attached to.
///
/// Inserting a new `Transition` over a running one discards the old run; the
/// new one continues from whatever opacity the surface was left at.
#[derive(Component)]
pub struct Transition {
    state: TransitionState,
    mode: SurfaceMode,
    detached_opacity: f32,
}

impl Transition {
    pub fn new(sequence: TransitionSequence<TransitionAction>) -> Self {
        Self::with_mode(sequence, SurfaceMode::Direct)
    }

    pub fn inverted(sequence: TransitionSequence<TransitionAction>) -> Self {
        Self::with_mode(sequence, SurfaceMode::Inverted)
    }

    pub fn detached(sequence: TransitionSequence<TransitionAction>) -> Self {
        Self::with_mode(sequence, SurfaceMode::Detached)
    }

    pub fn with_mode(sequence: TransitionSequence<TransitionAction>, mode: SurfaceMode) -> Self {
        Self {
            state: TransitionState::Pending(sequence),
            mode,
            detached_opacity: 0.0,
        }
    }

    pub fn mode(&self) -> SurfaceMode {
        self.mode
    }

    /// Current phase, or `None` if the sequence has not started yet.
    pub fn phase(&self) -> Option<Phase> {
        match &self.state {
            TransitionState::Pending(_) => None,
            TransitionState::Running(sequencer) => Some(sequencer.phase()),
            TransitionState::Finished => Some(Phase::Done),
        }
    }
}

/// System set for transition ticking.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransitionSet;

/// Tick every transition once with this frame's delta.
pub fn advance_transitions(
    mut commands: Commands,
    time: Res<Time>,
    mut scene_requests: EventWriter<SceneLoadRequest>,
    mut query: Query<(
        Entity,
        &mut Transition,
        Option<&mut BackgroundColor>,
        Option<&mut TextColor>,
        Option<&mut ImageNode>,
    )>,
) {
    let delta = time.delta_secs();

    for (entity, mut transition, mut background, mut text, mut image) in query.iter_mut() {
        let Transition { state, mode, detached_opacity } = &mut *transition;

        let surface: &mut dyn FadeableSurface = if *mode == SurfaceMode::Detached {
            detached_opacity
        } else if let Some(background) = background.as_deref_mut() {
            background
        } else if let Some(text) = text.as_deref_mut() {
            text
        } else if let Some(image) = image.as_deref_mut() {
            image
        } else {
            warn!("Transition on {:?} has nothing to fade, dropping it", entity);
            commands.entity(entity).remove::<Transition>();
            continue;
        };

        let result = if *mode == SurfaceMode::Inverted {
            drive(state, delta, &mut Inverted(surface))
        } else {
            drive(state, delta, surface)
        };

        match result {
            Ok(Progress::Running) => {}
            Ok(Progress::Finished(action)) => match action {
                TransitionAction::None => {
                    commands.entity(entity).remove::<Transition>();
                }
                TransitionAction::Despawn => {
                    commands.entity(entity).despawn_recursive();
                }
                TransitionAction::LoadScene(request) => {
                    scene_requests.send(request);
                    commands.entity(entity).remove::<Transition>();
                }
                TransitionAction::Then(next) => {
                    *state = TransitionState::Pending(*next);
                }
            },
            Ok(Progress::Spent) => {
                commands.entity(entity).remove::<Transition>();
            }
            Err(e) => {
                error!("Invalid transition on {:?}: {}", entity, e);
                commands.entity(entity).remove::<Transition>();
            }
        }
    }
}

/// Start the sequence if needed, then advance it.
fn drive(
    state: &mut TransitionState,
    delta: f32,
    surface: &mut dyn FadeableSurface,
) -> Result<Progress<TransitionAction>, TransitionError> {
    let mut sequencer = match std::mem::replace(state, TransitionState::Finished) {
        TransitionState::Pending(sequence) => TransitionSequencer::start(sequence, surface)?,
        TransitionState::Running(sequencer) => sequencer,
        TransitionState::Finished => return Ok(Progress::Spent),
    };

    let progress = sequencer.advance(delta, surface);
    *state = TransitionState::Running(sequencer);
    Ok(progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::color::Alpha;
    use crate::core::GameScene;
    use crate::transition::FadeTimings;

    #[derive(Component)]
    struct Probe;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<SceneLoadRequest>()
            .add_systems(Update, advance_transitions);
        app
    }

    fn instant(action: TransitionAction) -> TransitionSequence<TransitionAction> {
        FadeTimings::new(0.0, 0.0, 0.0).then(action)
    }

    fn sent_requests(app: &App) -> Vec<SceneLoadRequest> {
        app.world()
            .resource::<Events<SceneLoadRequest>>()
            .iter_current_update_events()
            .copied()
            .collect()
    }

    #[test]
    fn finished_transition_requests_scene() {
        let mut app = test_app();
        let request = SceneLoadRequest::via_loading(GameScene::Menu);
        let entity = app
            .world_mut()
            .spawn((
                BackgroundColor(Color::BLACK),
                Transition::new(instant(TransitionAction::LoadScene(request))),
            ))
            .id();

        app.update();

        assert_eq!(sent_requests(&app), vec![request]);
        assert!(app.world().get::<Transition>(entity).is_none());
        let alpha = app.world().get::<BackgroundColor>(entity).unwrap().0.alpha();
        assert_eq!(alpha, 0.0);
    }

    #[test]
    fn despawn_action_removes_entity() {
        let mut app = test_app();
        app.world_mut().spawn((
            Probe,
            TextColor(Color::WHITE),
            Transition::new(instant(TransitionAction::Despawn)),
        ));

        app.update();

        let remaining = app
            .world_mut()
            .query_filtered::<Entity, With<Probe>>()
            .iter(app.world())
            .count();
        assert_eq!(remaining, 0);
    }

    #[test]
    fn inverted_overlay_ends_opaque() {
        let mut app = test_app();
        let entity = app
            .world_mut()
            .spawn((
                BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.2)),
                Transition::inverted(instant(TransitionAction::None)),
            ))
            .id();

        app.update();

        let alpha = app.world().get::<BackgroundColor>(entity).unwrap().0.alpha();
        assert_eq!(alpha, 1.0);
    }

    #[test]
    fn chained_transition_runs_after_first() {
        let mut app = test_app();
        let request = SceneLoadRequest::direct(GameScene::Game);
        let chained = TransitionAction::Then(Box::new(instant(TransitionAction::LoadScene(request))));
        let entity = app
            .world_mut()
            .spawn(Transition::detached(instant(chained)))
            .id();

        app.update();
        assert!(sent_requests(&app).is_empty());
        assert_eq!(app.world().get::<Transition>(entity).unwrap().phase(), None);

        app.update();
        assert_eq!(sent_requests(&app), vec![request]);
        assert!(app.world().get::<Transition>(entity).is_none());
    }

    #[test]
    fn detached_transition_leaves_colors_alone() {
        let mut app = test_app();
        let entity = app
            .world_mut()
            .spawn((
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.5)),
                Transition::detached(instant(TransitionAction::None)),
            ))
            .id();

        app.update();

        assert_eq!(app.world().get::<TextColor>(entity).unwrap().0.alpha(), 0.5);
        assert!(app.world().get::<Transition>(entity).is_none());
    }

    #[test]
    fn invalid_timings_are_dropped() {
        let mut app = test_app();
        let entity = app
            .world_mut()
            .spawn((
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.5)),
                Transition::new(FadeTimings::new(-1.0, 0.0, 0.0).then(TransitionAction::None)),
            ))
            .id();

        app.update();

        assert!(app.world().get::<Transition>(entity).is_none());
        assert_eq!(app.world().get::<TextColor>(entity).unwrap().0.alpha(), 0.5);
    }

    #[test]
    fn transition_without_surface_is_dropped() {
        let mut app = test_app();
        let entity = app
            .world_mut()
            .spawn(Transition::new(FadeTimings::new(1.0, 1.0, 1.0).then(TransitionAction::None)))
            .id();

        app.update();

        assert!(app.world().get::<Transition>(entity).is_none());
    }
}
