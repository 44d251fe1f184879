//! Screen timing configuration loaded from an external RON file.
//!
//! Allows tweaking splash, loading, tip and death timings without recompilation.

use bevy::prelude::*;
use serde::Deserialize;

use super::sequencer::FadeTimings;
use crate::core::{load_ron_file, DataLoadError, SceneRoute};

const CONFIG_PATH: &str = "assets/data/ui/transitions.ron";

/// One splash screen: how it fades and how it hands over to the next scene.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SplashTimings {
    pub fade: FadeTimings,
    pub route: SceneRoute,
}

/// Gaps between the steps of the death sequence, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DeathTimings {
    pub first_image: f32,
    pub second_image: f32,
    pub bite: f32,
}

/// Timings for every screen transition, loaded from assets/data/ui/transitions.ron.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub splash_vini: SplashTimings,
    pub splash_game: SplashTimings,
    /// Start screen overlay fade before loading the game
    pub menu_fade_out: f32,
    /// Black screen wait after the start screen fade
    pub menu_wait: f32,
    pub loading: FadeTimings,
    /// Fade in/out time of tip popups
    pub tip_fade: f32,
    /// Default tip display time, zones may override it
    pub tip_display: f32,
    pub death: DeathTimings,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            splash_vini: SplashTimings {
                fade: FadeTimings::new(2.0, 2.0, 2.0),
                route: SceneRoute::Direct,
            },
            splash_game: SplashTimings {
                fade: FadeTimings::new(2.5, 3.0, 2.5),
                route: SceneRoute::ViaLoading,
            },
            menu_fade_out: 1.5,
            menu_wait: 2.0,
            loading: FadeTimings::new(0.5, 1.5, 0.5),
            tip_fade: 1.0,
            tip_display: 3.0,
            death: DeathTimings {
                first_image: 2.0,
                second_image: 2.0,
                bite: 1.0,
            },
        }
    }
}

impl TransitionConfig {
    /// Check every duration, returning the first bad one.
    pub fn validate(&self) -> Result<(), String> {
        for (name, timings) in [
            ("splash_vini", self.splash_vini.fade),
            ("splash_game", self.splash_game.fade),
            ("loading", self.loading),
            ("menu", FadeTimings::new(0.0, self.menu_wait, self.menu_fade_out)),
            ("tip", FadeTimings::new(self.tip_fade, self.tip_display, self.tip_fade)),
            (
                "death",
                FadeTimings::new(self.death.first_image, self.death.second_image, self.death.bite),
            ),
        ] {
            timings.validate().map_err(|e| format!("{name}: {e}"))?;
        }
        Ok(())
    }

    /// Parse and validate a config from RON text.
    pub fn from_ron(path: &str, contents: &str) -> Result<Self, DataLoadError> {
        let config: Self = ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        config.checked(path)
    }

    fn checked(self, path: &str) -> Result<Self, DataLoadError> {
        self.validate().map_err(|details| DataLoadError::Invalid {
            path: path.to_string(),
            details,
        })?;
        Ok(self)
    }

    /// Load from the config file, falling back to defaults on any error.
    pub fn load() -> Self {
        match load_ron_file::<Self>(CONFIG_PATH).and_then(|config| config.checked(CONFIG_PATH)) {
            Ok(config) => {
                info!("Loaded transition config from {}", CONFIG_PATH);
                config
            }
            Err(DataLoadError::FileNotFound(path)) => {
                warn!("Could not find {}. Using default transition timings.", path);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using default transition timings.", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(TransitionConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = TransitionConfig::from_ron(
            "inline",
            "(tip_display: 5.0, loading: (fade_in: 0.0, hold: 2.5, fade_out: 0.0))",
        )
        .unwrap();

        assert_eq!(config.tip_display, 5.0);
        assert_eq!(config.loading, FadeTimings::hold_only(2.5));
        assert_eq!(config.menu_wait, TransitionConfig::default().menu_wait);
    }

    #[test]
    fn splash_route_is_read() {
        let config = TransitionConfig::from_ron(
            "inline",
            "(splash_vini: (fade: (fade_in: 1.0, hold: 1.0, fade_out: 1.0), route: ViaLoading))",
        )
        .unwrap();

        assert_eq!(config.splash_vini.route, SceneRoute::ViaLoading);
    }

    #[test]
    fn negative_timing_is_rejected() {
        let err = TransitionConfig::from_ron("inline", "(menu_wait: -2.0)").unwrap_err();

        assert!(matches!(err, DataLoadError::Invalid { .. }));
        assert!(err.to_string().contains("menu"));
    }

    #[test]
    fn bundled_config_file_is_valid() {
        let contents = std::fs::read_to_string(CONFIG_PATH).unwrap();
        assert!(TransitionConfig::from_ron(CONFIG_PATH, &contents).is_ok());
    }
}
