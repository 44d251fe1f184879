//! World module - the house level and its trigger volumes.

mod builder;
mod data;
mod plugin;
mod triggers;

pub use builder::LevelGeometry;
pub use data::{CurrentLevel, LevelDefinition, LevelRegistry, TriggerDef, TriggerKind};
pub use plugin::{setup_level, WorldPlugin};
pub use triggers::{ExitZone, HintType, LethalZone, TipZone, INTERACT_KEY};
