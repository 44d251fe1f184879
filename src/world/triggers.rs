//! Trigger volumes - tips, the exit, and lethal zones.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use serde::Deserialize;

use crate::core::{GameScene, SceneLoadRequest};
use crate::player::Player;
use crate::ui::{InteractionPrompt, ShowTip};

/// Key that uses the exit.
pub const INTERACT_KEY: KeyCode = KeyCode::KeyE;

/// Hints a tip zone can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum HintType {
    Flashlight,
    Sprint,
    Crouch,
    Interact,
    FindExit,
}

impl HintType {
    pub fn text(self) -> &'static str {
        match self {
            HintType::Flashlight => "Press \"F\" to use the Flashlight.",
            HintType::Sprint => "Press \"Shift\" to use the Sprint.",
            HintType::Crouch => "Press \"Ctrl\" to use the Crouch.",
            HintType::Interact => "Press \"E\" to Interact.",
            HintType::FindExit => "Find the Exit!",
        }
    }
}

#[derive(Component, Debug)]
pub struct TipZone {
    pub hint: HintType,
    pub show_once: bool,
    pub already_shown: bool,
    pub display: Option<f32>,
}

impl TipZone {
    pub fn new(hint: HintType, show_once: bool, display: Option<f32>) -> Self {
        Self {
            hint,
            show_once,
            already_shown: false,
            display,
        }
    }

    /// Mark the tip as shown, returning false if it should stay quiet.
    fn try_show(&mut self) -> bool {
        if self.show_once && self.already_shown {
            return false;
        }
        self.already_shown = true;
        true
    }
}

#[derive(Component, Debug, Default)]
pub struct ExitZone {
    /// Player is standing inside
    pub occupied: bool,
}

#[derive(Component, Debug)]
pub struct LethalZone;

/// Physics components shared by every trigger volume.
pub fn trigger_collider(half_extents: Vec3) -> impl Bundle {
    (
        Collider::cuboid(half_extents.x, half_extents.y, half_extents.z),
        Sensor,
        ActiveEvents::COLLISION_EVENTS,
        ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_STATIC,
    )
}

/// React to the player entering or leaving trigger volumes.
pub fn handle_trigger_events(
    mut collisions: EventReader<CollisionEvent>,
    player_query: Query<(), With<Player>>,
    mut tip_query: Query<&mut TipZone>,
    mut exit_query: Query<&mut ExitZone>,
    lethal_query: Query<(), With<LethalZone>>,
    mut prompt: ResMut<InteractionPrompt>,
    mut tips: EventWriter<ShowTip>,
    mut scene_requests: EventWriter<SceneLoadRequest>,
) {
    for event in collisions.read() {
        let (a, b, entered) = match *event {
            CollisionEvent::Started(a, b, _) => (a, b, true),
            CollisionEvent::Stopped(a, b, _) => (a, b, false),
        };

        let zone = if player_query.contains(a) {
            b
        } else if player_query.contains(b) {
            a
        } else {
            continue;
        };

        if let Ok(mut exit) = exit_query.get_mut(zone) {
            exit.occupied = entered;
            if entered {
                prompt.set_interaction(INTERACT_KEY, "Exit");
            } else {
                prompt.clear();
            }
        }

        if !entered {
            continue;
        }

        if let Ok(mut tip) = tip_query.get_mut(zone) {
            if tip.try_show() {
                tips.send(ShowTip {
                    text: tip.hint.text().to_string(),
                    display: tip.display,
                });
            }
        }

        if lethal_query.contains(zone) {
            info!("Player entered a lethal zone");
            scene_requests.send(SceneLoadRequest::direct(GameScene::Death));
        }
    }
}

/// Use the exit while standing in it.
pub fn use_exit(
    keyboard: Res<ButtonInput<KeyCode>>,
    exit_query: Query<&ExitZone>,
    mut scene_requests: EventWriter<SceneLoadRequest>,
) {
    if !keyboard.just_pressed(INTERACT_KEY) {
        return;
    }
    if exit_query.iter().any(|exit| exit.occupied) {
        info!("Player escaped the house");
        scene_requests.send(SceneLoadRequest::via_loading(GameScene::Win));
    }
}
