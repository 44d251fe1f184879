//! Audio module - one-shot sound effects and pause handling.

mod plugin;

pub use plugin::{play_sfx, sfx, SfxPlugin};
