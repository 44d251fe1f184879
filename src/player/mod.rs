//! Player module - player entity, movement, camera and flashlight.

mod components;
mod flashlight;
mod movement;
mod plugin;

pub use components::*;
pub use movement::{spawn_player, PlayerCamera};
pub use plugin::PlayerPlugin;
