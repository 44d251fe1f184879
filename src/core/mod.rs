//! Core game module - scene states, scene loading, and pausing.
//!
//! This module provides the foundation that all other game systems build upon.

mod error;
mod events;
mod plugin;
mod states;

pub use error::{load_ron_file, DataLoadError};
pub use events::*;
pub use plugin::{apply_scene_requests, despawn_all, CorePlugin, PendingScene, SceneLoaderSet};
pub use states::*;
