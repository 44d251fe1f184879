//! First-person player movement and camera control.

use bevy::input::mouse::MouseMotion;
use bevy::pbr::FogFalloff;
use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;
use bevy::window::{CursorGrabMode, PrimaryWindow};
use bevy_rapier3d::prelude::*;

use super::components::*;
use crate::core::PauseState;
use crate::rendering::VisualConfig;

/// The player's camera.
#[derive(Component, Default)]
pub struct PlayerCamera {
    /// Current pitch angle in radians (looking up/down)
    pub pitch: f32,
}

/// Set up player movement systems.
pub fn setup_movement_systems(app: &mut App) {
    app.add_systems(OnEnter(PauseState::Running), grab_cursor)
        .add_systems(OnExit(PauseState::Running), release_cursor)
        .add_systems(
            Update,
            (mouse_look, player_movement, update_posture)
                .chain()
                .run_if(in_state(PauseState::Running)),
        );
}

/// Grab and hide cursor while playing.
fn grab_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    }
}

/// Release cursor when pausing or leaving the game.
fn release_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}

/// Handle mouse movement for looking around.
///
/// Rotates the player entity horizontally (yaw) and the camera vertically (pitch).
/// The camera is a child of the player, so horizontal rotation affects both.
pub fn mouse_look(
    mut mouse_motion: EventReader<MouseMotion>,
    config: Res<PlayerConfig>,
    mut player_query: Query<&mut Transform, With<Player>>,
    mut camera_query: Query<(&mut Transform, &mut PlayerCamera), Without<Player>>,
) {
    let delta: Vec2 = mouse_motion.read().map(|event| event.delta).sum();
    if delta == Vec2::ZERO {
        return;
    }

    let Ok(mut player_transform) = player_query.get_single_mut() else {
        return;
    };
    let Ok((mut camera_transform, mut camera)) = camera_query.get_single_mut() else {
        return;
    };

    let sensitivity = config.mouse_sensitivity * 0.001;
    let y_invert = if config.invert_y { -1.0 } else { 1.0 };

    player_transform.rotate_y(-delta.x * sensitivity);

    // Clamped to about 80 degrees either way
    camera.pitch -= delta.y * sensitivity * y_invert;
    camera.pitch = camera.pitch.clamp(-1.4, 1.4);

    camera_transform.rotation = Quat::from_rotation_x(camera.pitch);
}

/// Handle WASD movement, sprinting, crouching and jumping.
///
/// Uses Rapier's KinematicCharacterController for collision detection.
pub fn player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    config: Res<PlayerConfig>,
    mut player_query: Query<
        (
            &Transform,
            &mut MovementState,
            &mut KinematicCharacterController,
            Option<&KinematicCharacterControllerOutput>,
        ),
        With<Player>,
    >,
) {
    let Ok((transform, mut movement_state, mut controller, output)) = player_query.get_single_mut()
    else {
        return;
    };

    // No output yet on the first frame after spawning
    let is_grounded = output.map_or(true, |output| output.grounded);
    movement_state.is_grounded = is_grounded;

    movement_state.is_crouching =
        keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]);

    if is_grounded {
        if movement_state.vertical_velocity < 0.0 {
            movement_state.vertical_velocity = 0.0;
        }
        if keyboard.just_pressed(KeyCode::Space) && !movement_state.is_crouching {
            movement_state.vertical_velocity = config.jump_force;
        }
    } else {
        movement_state.vertical_velocity -= config.gravity * time.delta_secs();
    }

    let mut direction = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        direction.z -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        direction.z += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        direction.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        direction.x += 1.0;
    }
    let direction = direction.normalize_or_zero();

    // Only the horizontal part of the facing matters for walking
    let yaw = transform.rotation.to_euler(EulerRot::YXZ).0;
    let movement = Quat::from_rotation_y(yaw) * direction;

    movement_state.is_sprinting = direction != Vec3::ZERO
        && !movement_state.is_crouching
        && keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);

    let speed = if movement_state.is_crouching {
        config.move_speed * config.crouch_multiplier
    } else if movement_state.is_sprinting {
        config.move_speed * config.sprint_multiplier
    } else {
        config.move_speed
    };

    let horizontal = movement * speed * time.delta_secs();
    let vertical = Vec3::Y * movement_state.vertical_velocity * time.delta_secs();

    controller.translation = Some(horizontal + vertical);
}

/// Ease the camera toward standing or crouched eye height.
fn update_posture(
    time: Res<Time>,
    config: Res<PlayerConfig>,
    player_query: Query<&MovementState, With<Player>>,
    mut camera_query: Query<&mut Transform, With<PlayerCamera>>,
) {
    let Ok(movement_state) = player_query.get_single() else {
        return;
    };
    let Ok(mut camera_transform) = camera_query.get_single_mut() else {
        return;
    };

    let target = if movement_state.is_crouching {
        config.crouch_eye_height
    } else {
        config.eye_height
    };
    let t = (config.posture_speed * time.delta_secs()).min(1.0);
    let current = camera_transform.translation.y;
    camera_transform.translation.y = current + (target - current) * t;
}

/// Spawn the player entity with camera and flashlight.
pub fn spawn_player(
    commands: &mut Commands,
    position: Vec3,
    config: &PlayerConfig,
    visual_config: &VisualConfig,
) -> Entity {
    let player = commands
        .spawn((
            Player,
            MovementState::default(),
            Transform::from_translation(position),
            Visibility::default(),
            // Rapier physics components
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(0.5, 0.3),
            // Needed for sensor volumes (fixed colliders) to see the player
            ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_STATIC,
            ActiveEvents::COLLISION_EVENTS,
            KinematicCharacterController {
                offset: CharacterLength::Absolute(0.01),
                autostep: Some(CharacterAutostep {
                    max_height: CharacterLength::Absolute(0.3),
                    min_width: CharacterLength::Absolute(0.2),
                    include_dynamic_bodies: false,
                }),
                max_slope_climb_angle: 45_f32.to_radians(),
                min_slope_slide_angle: 30_f32.to_radians(),
                snap_to_ground: Some(CharacterLength::Absolute(0.5)),
                ..default()
            },
        ))
        .id();

    commands.entity(player).with_children(|parent| {
        parent
            .spawn((
                Camera3d::default(),
                Camera {
                    clear_color: ClearColorConfig::Custom(visual_config.clear_color()),
                    ..default()
                },
                DistanceFog {
                    color: visual_config.fog_color(),
                    falloff: FogFalloff::ExponentialSquared {
                        density: visual_config.effective_fog_density(),
                    },
                    directional_light_color: Color::NONE,
                    directional_light_exponent: 8.0,
                },
                PlayerCamera::default(),
                Transform::from_xyz(0.0, config.eye_height, 0.0),
            ))
            .with_children(|camera| {
                camera.spawn((
                    SpotLight {
                        color: Color::srgb(1.0, 0.95, 0.85),
                        intensity: 0.0,
                        range: 25.0,
                        inner_angle: 0.25,
                        outer_angle: 0.45,
                        shadows_enabled: true,
                        ..default()
                    },
                    Flashlight::default(),
                    Transform::from_xyz(0.15, -0.1, 0.0),
                ));
            });
    });

    player
}
