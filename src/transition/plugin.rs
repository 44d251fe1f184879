//! Transition plugin - ticks every fade sequence once per frame.

use bevy::prelude::*;

use super::component::{advance_transitions, TransitionSet};
use super::config::TransitionConfig;
use crate::core::SceneLoaderSet;

/// Transition plugin - loads screen timings and drives `Transition` components.
pub struct TransitionPlugin;

impl Plugin for TransitionPlugin {
    fn build(&self, app: &mut App) {
        // Loaded at build time: the first splash screen is entered before any startup system runs
        app.insert_resource(TransitionConfig::load())
            .configure_sets(Update, TransitionSet.before(SceneLoaderSet))
            .add_systems(Update, advance_transitions.in_set(TransitionSet));
    }
}
