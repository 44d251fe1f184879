//! Death screen - a short staged scare before the game over screen.

use std::time::Duration;

use bevy::prelude::*;
use bevy_kira_audio::Audio;

use super::plugin::{screen_root, screen_text};
use crate::audio::{play_sfx, sfx};
use crate::core::{despawn_all, GameScene, SceneLoadRequest};
use crate::transition::{DeathTimings, TransitionConfig};

#[derive(Component)]
struct DeathUi;

#[derive(Component)]
struct FirstDeathImage;

#[derive(Component)]
struct SecondDeathImage;

/// Steps of the death sequence, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathStage {
    FirstImage,
    SecondImage,
    Bite,
    Finished,
}

impl DeathStage {
    fn next(self) -> Self {
        match self {
            DeathStage::FirstImage => DeathStage::SecondImage,
            DeathStage::SecondImage => DeathStage::Bite,
            DeathStage::Bite | DeathStage::Finished => DeathStage::Finished,
        }
    }

    /// How long this stage lasts before the next one.
    fn duration(self, timings: &DeathTimings) -> f32 {
        match self {
            DeathStage::FirstImage => timings.first_image,
            DeathStage::SecondImage => timings.second_image,
            DeathStage::Bite => timings.bite,
            DeathStage::Finished => 0.0,
        }
    }
}

/// Current stage and the time left in it.
#[derive(Component, Debug)]
pub struct DeathSequence {
    stage: DeathStage,
    timer: Timer,
}

impl DeathSequence {
    pub fn new(timings: &DeathTimings) -> Self {
        Self {
            stage: DeathStage::FirstImage,
            timer: stage_timer(DeathStage::FirstImage, timings),
        }
    }

    pub fn stage(&self) -> DeathStage {
        self.stage
    }

    /// Advance the clock; returns the stage just entered, if any.
    ///
    /// At most one stage is entered per call.
    pub fn tick(&mut self, delta: Duration, timings: &DeathTimings) -> Option<DeathStage> {
        if self.stage == DeathStage::Finished {
            return None;
        }

        self.timer.tick(delta);
        if !self.timer.finished() {
            return None;
        }

        self.stage = self.stage.next();
        self.timer = stage_timer(self.stage, timings);
        Some(self.stage)
    }
}

fn stage_timer(stage: DeathStage, timings: &DeathTimings) -> Timer {
    Timer::from_seconds(stage.duration(timings).max(0.0), TimerMode::Once)
}

pub fn setup_death_systems(app: &mut App) {
    app.add_systems(OnEnter(GameScene::Death), spawn_death_screen)
        .add_systems(Update, advance_death_sequence.run_if(in_state(GameScene::Death)))
        .add_systems(OnExit(GameScene::Death), despawn_all::<DeathUi>);
}

fn spawn_death_screen(
    mut commands: Commands,
    config: Res<TransitionConfig>,
    audio: Res<Audio>,
    asset_server: Res<AssetServer>,
) {
    info!("Player died");
    play_sfx(&audio, &asset_server, sfx::DEATH_FIRST);

    commands.spawn((Camera2d, DeathUi));

    commands
        .spawn((
            screen_root(Color::BLACK),
            DeathSequence::new(&config.death),
            DeathUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                screen_text("It found you.", 56.0, Color::srgb(0.6, 0.6, 0.6), 0.0),
                FirstDeathImage,
            ));
            parent.spawn((
                screen_text("YOU DIED", 96.0, Color::srgb(0.75, 0.0, 0.0), 0.0),
                Visibility::Hidden,
                SecondDeathImage,
            ));
        });
}

fn advance_death_sequence(
    time: Res<Time>,
    config: Res<TransitionConfig>,
    mut sequence_query: Query<&mut DeathSequence>,
    mut first_query: Query<&mut Visibility, (With<FirstDeathImage>, Without<SecondDeathImage>)>,
    mut second_query: Query<&mut Visibility, (With<SecondDeathImage>, Without<FirstDeathImage>)>,
    mut scene_requests: EventWriter<SceneLoadRequest>,
    audio: Res<Audio>,
    asset_server: Res<AssetServer>,
) {
    let Ok(mut sequence) = sequence_query.get_single_mut() else {
        return;
    };

    let Some(stage) = sequence.tick(time.delta(), &config.death) else {
        return;
    };

    match stage {
        DeathStage::FirstImage => {}
        DeathStage::SecondImage => {
            for mut visibility in first_query.iter_mut() {
                *visibility = Visibility::Hidden;
            }
            for mut visibility in second_query.iter_mut() {
                *visibility = Visibility::Inherited;
            }
            play_sfx(&audio, &asset_server, sfx::DEATH_SECOND);
        }
        DeathStage::Bite => {
            play_sfx(&audio, &asset_server, sfx::MONSTER_BITE);
        }
        DeathStage::Finished => {
            scene_requests.send(SceneLoadRequest::direct(GameScene::GameOver));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timings() -> DeathTimings {
        DeathTimings {
            first_image: 1.0,
            second_image: 0.5,
            bite: 0.25,
        }
    }

    #[test]
    fn stages_follow_their_timings() {
        let timings = timings();
        let mut sequence = DeathSequence::new(&timings);

        assert_eq!(sequence.tick(Duration::from_secs_f32(0.5), &timings), None);
        assert_eq!(
            sequence.tick(Duration::from_secs_f32(0.6), &timings),
            Some(DeathStage::SecondImage)
        );
        assert_eq!(
            sequence.tick(Duration::from_secs_f32(0.5), &timings),
            Some(DeathStage::Bite)
        );
        assert_eq!(
            sequence.tick(Duration::from_secs_f32(0.25), &timings),
            Some(DeathStage::Finished)
        );
        assert_eq!(sequence.tick(Duration::from_secs(10), &timings), None);
        assert_eq!(sequence.stage(), DeathStage::Finished);
    }

    #[test]
    fn one_stage_per_tick_even_with_zero_timings() {
        let timings = DeathTimings {
            first_image: 0.0,
            second_image: 0.0,
            bite: 0.0,
        };
        let mut sequence = DeathSequence::new(&timings);

        let entered: Vec<_> = (0..4).map(|_| sequence.tick(Duration::ZERO, &timings)).collect();

        assert_eq!(
            entered,
            vec![
                Some(DeathStage::SecondImage),
                Some(DeathStage::Bite),
                Some(DeathStage::Finished),
                None,
            ]
        );
    }
}
