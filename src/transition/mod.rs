//! Transition module - timed fade sequences and their completion actions.
//!
//! The sequencer itself is engine-agnostic; the `Transition` component binds
//! it to Bevy UI colors and the scene loader.

mod component;
mod config;
mod error;
mod plugin;
mod sequencer;
mod surface;

pub use component::{advance_transitions, SurfaceMode, Transition, TransitionAction, TransitionSet};
pub use config::{DeathTimings, SplashTimings, TransitionConfig};
pub use error::TransitionError;
pub use plugin::TransitionPlugin;
pub use sequencer::{FadeTimings, Phase, Progress, TickResult, TransitionSequence, TransitionSequencer};
pub use surface::{FadeableSurface, Inverted};
