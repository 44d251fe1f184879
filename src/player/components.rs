//! Player-related components.

use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Tracks player movement state for physics and posture.
#[derive(Component)]
pub struct MovementState {
    pub is_grounded: bool,
    pub vertical_velocity: f32,
    pub is_sprinting: bool,
    pub is_crouching: bool,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            is_grounded: true,
            vertical_velocity: 0.0,
            is_sprinting: false,
            is_crouching: false,
        }
    }
}

/// Configuration for the first-person controller.
#[derive(Resource)]
pub struct PlayerConfig {
    /// Mouse sensitivity multiplier
    pub mouse_sensitivity: f32,
    /// Invert Y-axis for mouse look
    pub invert_y: bool,
    /// Base movement speed in units per second
    pub move_speed: f32,
    /// Sprint speed multiplier
    pub sprint_multiplier: f32,
    /// Crouch speed multiplier
    pub crouch_multiplier: f32,
    /// Jump velocity
    pub jump_force: f32,
    /// Gravity acceleration
    pub gravity: f32,
    /// Camera height above the body center when standing
    pub eye_height: f32,
    /// Camera height above the body center when crouched
    pub crouch_eye_height: f32,
    /// How fast the camera moves between postures
    pub posture_speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 1.5,
            invert_y: false,
            move_speed: 3.5,
            sprint_multiplier: 1.8,
            crouch_multiplier: 0.5,
            jump_force: 5.0,
            gravity: 15.0,
            eye_height: 0.4,
            crouch_eye_height: -0.1,
            posture_speed: 10.0,
        }
    }
}

/// The player's handheld light.
#[derive(Component)]
pub struct Flashlight {
    pub on: bool,
    /// Spotlight intensity while switched on
    pub intensity: f32,
}

impl Default for Flashlight {
    fn default() -> Self {
        Self {
            on: false,
            intensity: 600_000.0,
        }
    }
}

impl Flashlight {
    /// Flip the switch, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.on = !self.on;
        self.on
    }

    /// Intensity the spotlight should have right now.
    pub fn current_intensity(&self) -> f32 {
        if self.on {
            self.intensity
        } else {
            0.0
        }
    }
}
